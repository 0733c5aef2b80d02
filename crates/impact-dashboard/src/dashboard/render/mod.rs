mod cost;
mod flow;
mod map;

pub use cost::{render_cost_chart, CostBar, CostChartArtifact};
pub use flow::{render_flow_chart, DrawnLink, FlowArtifact};
pub use map::{render_map, MapArtifact, MapRegion};

use super::theme::Theme;
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Map,
    CostChart,
    Flow,
}

/// One rendered chart, ready to be embedded in a page section.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Map(MapArtifact),
    CostChart(CostChartArtifact),
    Flow(FlowArtifact),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Map(_) => ArtifactKind::Map,
            Self::CostChart(_) => ArtifactKind::CostChart,
            Self::Flow(_) => ArtifactKind::Flow,
        }
    }

    /// Regions, bars, or edges, depending on the chart.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Map(map) => map.regions.len(),
            Self::CostChart(chart) => chart.bars.len(),
            Self::Flow(flow) => flow.links.len(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Map(map) => &map.title,
            Self::CostChart(chart) => &chart.title,
            Self::Flow(flow) => &flow.title,
        }
    }

    /// Plotly figure description: `{"data": [...], "layout": {...}}`.
    pub fn figure(&self) -> Value {
        match self {
            Self::Map(map) => map.figure(),
            Self::CostChart(chart) => chart.figure(),
            Self::Flow(flow) => flow.figure(),
        }
    }
}

pub(crate) fn base_layout(title: &str, height: u32, theme: &Theme) -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert("title".to_string(), json!({ "text": title }));
    layout.insert("height".to_string(), json!(height));
    layout.insert("autosize".to_string(), json!(true));
    layout.insert("paper_bgcolor".to_string(), json!(theme.surface));
    layout.insert("plot_bgcolor".to_string(), json!(theme.surface));
    layout.insert(
        "font".to_string(),
        json!({ "color": theme.text, "family": theme.font_family }),
    );
    layout
}
