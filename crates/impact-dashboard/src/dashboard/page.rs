use super::domain::DashboardData;
use super::format::escape_html;
use super::render::{render_cost_chart, render_flow_chart, render_map, Artifact, ArtifactKind};
use super::theme::Theme;
use super::variant::{VariantConfig, VariantName};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    Wide,
    Centered,
}

impl PageLayout {
    const fn css_class(self) -> &'static str {
        match self {
            Self::Wide => "layout-wide",
            Self::Centered => "layout-centered",
        }
    }
}

/// Everything the page chrome needs, handed over once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub title: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub footer: &'static str,
    pub layout: PageLayout,
    pub theme: Theme,
}

impl PageConfig {
    pub fn standard() -> Self {
        Self {
            title: "NUCLIREGEN-P | Global & Economic Impact",
            icon: "🌍",
            heading: "NUCLIREGEN-P: Global Impact Dashboard",
            footer: "NUCLIREGEN-P | Redefining Biomedical Access & Justice",
            layout: PageLayout::Wide,
            theme: Theme::dark(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub heading: &'static str,
    pub artifact: Artifact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub config: PageConfig,
    pub variant: VariantConfig,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub heading: &'static str,
    pub kind: ArtifactKind,
    pub title: String,
    pub element_count: usize,
    pub figure: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub heading: &'static str,
    pub variant: VariantName,
    pub sections: Vec<SectionView>,
}

impl DashboardPage {
    /// Renders the three charts and stacks them under their headings: map, costs, flow.
    pub fn compose(config: PageConfig, data: &DashboardData, variant: VariantConfig) -> Self {
        let theme = &config.theme;
        let sections = vec![
            Section {
                id: "map",
                heading: "Choropleth Map: Progeria Prevalence & Access",
                artifact: Artifact::Map(render_map(&data.countries, &variant, theme)),
            },
            Section {
                id: "costs",
                heading: "Cost Comparison per Patient",
                artifact: Artifact::CostChart(render_cost_chart(&data.costs, &variant, theme)),
            },
            Section {
                id: "flow",
                heading: "One-for-One Solidarity Flow",
                artifact: Artifact::Flow(render_flow_chart(
                    &data.flows,
                    &data.flow_nodes,
                    &variant,
                    theme,
                )),
            },
        ];
        debug!(variant = %variant.name, sections = sections.len(), "composed dashboard page");

        Self {
            config,
            variant,
            sections,
        }
    }

    pub fn section(&self, kind: ArtifactKind) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.artifact.kind() == kind)
    }

    pub fn view(&self) -> PageView {
        PageView {
            title: self.config.title,
            heading: self.config.heading,
            variant: self.variant.name,
            sections: self
                .sections
                .iter()
                .map(|section| SectionView {
                    id: section.id,
                    heading: section.heading,
                    kind: section.artifact.kind(),
                    title: section.artifact.title().to_string(),
                    element_count: section.artifact.element_count(),
                    figure: section.artifact.figure(),
                })
                .collect(),
        }
    }

    /// Self-contained document; plotly.js supplies pan, zoom, hover, and rotate.
    pub fn to_html(&self) -> String {
        let config = &self.config;
        let mut html = String::new();

        html.push_str(&format!(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n\
             <meta charset=\"utf-8\" />\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
             <title>{title}</title>\n\
             <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>\" />\n\
             <script src=\"{cdn}\"></script>\n\
             <style>\n{css}main.layout-centered {{ max-width: 960px; margin: 0 auto; }}\n</style>\n\
             </head>\n<body>\n<main class=\"{layout}\">\n<h1>{heading}</h1>\n",
            title = escape_html(config.title),
            icon = escape_html(config.icon),
            cdn = PLOTLY_CDN,
            css = config.theme.stylesheet(),
            layout = config.layout.css_class(),
            heading = escape_html(config.heading),
        ));

        for section in &self.sections {
            html.push_str(&format!(
                "<section class=\"chart\" id=\"section-{id}\">\n<h2>{heading}</h2>\n<div id=\"chart-{id}\"></div>\n</section>\n",
                id = section.id,
                heading = escape_html(section.heading),
            ));
        }

        let figures: Vec<Value> = self
            .sections
            .iter()
            .map(|section| {
                json!({
                    "target": format!("chart-{}", section.id),
                    "figure": section.artifact.figure(),
                })
            })
            .collect();
        // `</` would terminate the inline script early.
        let payload = Value::Array(figures).to_string().replace("</", "<\\/");

        html.push_str(&format!(
            "<footer><p>{footer}</p></footer>\n</main>\n<script>\n\
             const figures = {payload};\n\
             for (const entry of figures) {{\n  \
             Plotly.newPlot(entry.target, entry.figure.data, entry.figure.layout, {{ responsive: true, displaylogo: false }});\n\
             }}\n</script>\n</body>\n</html>\n",
            footer = escape_html(config.footer),
        ));

        html
    }
}
