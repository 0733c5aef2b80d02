use serde::Serialize;

/// Colors and typography shared by the figures and the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub grid: &'static str,
    pub font_family: &'static str,
    pub bar_palette: Vec<&'static str>,
    pub flow_link_palette: Vec<&'static str>,
    pub node_outline: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: "#0d1117",
            surface: "#111111",
            text: "#ffffff",
            heading: "#00ffff",
            muted: "#aaaaaa",
            accent: "#00ffff",
            grid: "#283442",
            font_family: "\"Open Sans\", verdana, arial, sans-serif",
            bar_palette: vec!["#00ffff", "#ffaa00", "#ff004c"],
            flow_link_palette: vec!["#00f7ff", "#fc46aa", "#ffcf00"],
            node_outline: "black",
        }
    }

    pub fn bar_color(&self, index: usize) -> &'static str {
        cycle(&self.bar_palette, index, self.accent)
    }

    pub fn link_color(&self, index: usize) -> &'static str {
        cycle(&self.flow_link_palette, index, self.muted)
    }

    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ margin: 0; background-color: {bg}; color: {text}; font-family: {font}; }}\n\
             main {{ padding: 2rem; }}\n\
             h1, h2 {{ color: {heading}; }}\n\
             section.chart {{ width: 100%; margin-bottom: 2rem; }}\n\
             section.chart > div {{ width: 100%; }}\n\
             footer {{ border-top: 1px solid {accent}; padding-top: 1rem; text-align: center; color: {muted}; }}\n",
            bg = self.background,
            text = self.text,
            font = self.font_family,
            heading = self.heading,
            accent = self.accent,
            muted = self.muted,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn cycle(palette: &[&'static str], index: usize, fallback: &'static str) -> &'static str {
    if palette.is_empty() {
        fallback
    } else {
        palette[index % palette.len()]
    }
}
