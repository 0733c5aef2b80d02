use super::base_layout;
use crate::dashboard::domain::TherapyCostRecord;
use crate::dashboard::format::format_usd;
use crate::dashboard::theme::Theme;
use crate::dashboard::variant::{BarStyle, VariantConfig};
use serde::Serialize;
use serde_json::{json, Value};

const COST_TITLE: &str = "Cost per Patient: NUCLIREGEN vs. Others";
const COST_HEIGHT: u32 = 500;
const X_AXIS_TITLE: &str = "Therapy Type";
const Y_AXIS_TITLE: &str = "USD per Treatment";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBar {
    pub therapy: &'static str,
    pub cost_usd: f64,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostChartArtifact {
    pub title: String,
    pub bars: Vec<CostBar>,
    pub style: BarStyle,
    pub height: u32,
    pub theme: Theme,
}

impl CostChartArtifact {
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|bar| bar.label.as_str()).collect()
    }

    pub fn figure(&self) -> Value {
        // One trace per therapy so each bar gets its own legend entry and color.
        let traces: Vec<Value> = self
            .bars
            .iter()
            .map(|bar| {
                json!({
                    "type": "bar",
                    "name": bar.therapy,
                    "x": [bar.therapy],
                    "y": [bar.cost_usd],
                    "text": [bar.label],
                    "textposition": "outside",
                    "cliponaxis": false,
                    "hovertemplate": "%{x}: %{text}<extra></extra>",
                    "marker": self.marker(bar.color),
                })
            })
            .collect();

        let mut layout = base_layout(&self.title, self.height, &self.theme);
        layout.insert("showlegend".to_string(), json!(true));
        layout.insert("legend".to_string(), json!({ "title": { "text": "Therapy" } }));
        layout.insert(
            "xaxis".to_string(),
            json!({ "title": { "text": X_AXIS_TITLE }, "gridcolor": self.theme.grid }),
        );
        layout.insert(
            "yaxis".to_string(),
            json!({
                "title": { "text": Y_AXIS_TITLE },
                "gridcolor": self.theme.grid,
                "tickformat": "$,.0f",
            }),
        );
        if self.style == BarStyle::Shaded {
            layout.insert("bargap".to_string(), json!(0.35));
        }

        json!({ "data": traces, "layout": layout })
    }

    fn marker(&self, color: &str) -> Value {
        match self.style {
            BarStyle::Flat => json!({ "color": color }),
            BarStyle::Shaded => {
                let edge = darken(color, 0.55);
                json!({
                    "color": color,
                    "opacity": 0.85,
                    "line": { "color": edge, "width": 3 },
                    "pattern": { "shape": "/", "fgcolor": edge, "solidity": 0.2 },
                })
            }
        }
    }
}

/// One bar per therapy with a currency label above it.
pub fn render_cost_chart(
    costs: &[TherapyCostRecord],
    variant: &VariantConfig,
    theme: &Theme,
) -> CostChartArtifact {
    let bars = costs
        .iter()
        .enumerate()
        .map(|(idx, record)| CostBar {
            therapy: record.therapy,
            cost_usd: record.cost_usd,
            label: format_usd(record.cost_usd),
            color: theme.bar_color(idx),
        })
        .collect();

    CostChartArtifact {
        title: COST_TITLE.to_string(),
        bars,
        style: variant.bar_style,
        height: COST_HEIGHT,
        theme: theme.clone(),
    }
}

/// Scales an `#rrggbb` color toward black; other color syntaxes pass through.
fn darken(color: &str, factor: f64) -> String {
    let hex = match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.is_ascii() => hex,
        _ => return color.to_string(),
    };

    let mut channels = [0u8; 3];
    for (idx, channel) in channels.iter_mut().enumerate() {
        match u8::from_str_radix(&hex[idx * 2..idx * 2 + 2], 16) {
            Ok(value) => *channel = (f64::from(value) * factor).round() as u8,
            Err(_) => return color.to_string(),
        }
    }

    format!("#{:02x}{:02x}{:02x}", channels[0], channels[1], channels[2])
}
