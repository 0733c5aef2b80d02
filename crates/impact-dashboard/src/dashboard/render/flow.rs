use super::base_layout;
use crate::dashboard::domain::{FlowNode, FlowRecord};
use crate::dashboard::theme::Theme;
use crate::dashboard::variant::{NodeOrdering, VariantConfig};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

const FLOW_TITLE: &str = "Global Distribution Model: NUCLIREGEN-P Solidarity System";
const FLOW_HEIGHT: u32 = 550;
const FLOW_FONT_SIZE: u32 = 14;
const NODE_PAD: u32 = 20;
const NODE_THICKNESS: u32 = 30;

/// An edge expressed in drawn node positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowArtifact {
    pub title: String,
    /// Nodes in drawn order.
    pub nodes: Vec<FlowNode>,
    pub links: Vec<DrawnLink>,
    pub ordering: NodeOrdering,
    pub height: u32,
    pub theme: Theme,
}

impl FlowArtifact {
    pub fn outflow(&self, label: &str) -> Option<f64> {
        let position = self.position_of(label)?;
        Some(
            self.links
                .iter()
                .filter(|link| link.source == position)
                .map(|link| link.value)
                .sum(),
        )
    }

    pub fn inflow(&self, label: &str) -> Option<f64> {
        let position = self.position_of(label)?;
        Some(
            self.links
                .iter()
                .filter(|link| link.target == position)
                .map(|link| link.value)
                .sum(),
        )
    }

    fn position_of(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.label == label)
    }

    pub fn figure(&self) -> Value {
        let labels: Vec<&str> = self.nodes.iter().map(|node| node.label).collect();
        let node_colors: Vec<&str> = self.nodes.iter().map(|node| node.color).collect();
        let sources: Vec<usize> = self.links.iter().map(|link| link.source).collect();
        let targets: Vec<usize> = self.links.iter().map(|link| link.target).collect();
        let values: Vec<f64> = self.links.iter().map(|link| link.value).collect();
        let link_colors: Vec<&str> = self.links.iter().map(|link| link.color).collect();

        let trace = json!({
            "type": "sankey",
            "node": {
                "pad": NODE_PAD,
                "thickness": NODE_THICKNESS,
                "line": { "color": self.theme.node_outline, "width": 0.5 },
                "label": labels,
                "color": node_colors,
            },
            "link": {
                "source": sources,
                "target": targets,
                "value": values,
                "color": link_colors,
            },
        });

        let mut layout = base_layout(&self.title, self.height, &self.theme);
        layout.insert(
            "font".to_string(),
            json!({
                "size": FLOW_FONT_SIZE,
                "color": self.theme.text,
                "family": self.theme.font_family,
            }),
        );

        json!({ "data": [trace], "layout": layout })
    }
}

/// Lays out the labeled nodes in the variant's order and remaps every edge onto it.
///
/// Edges whose endpoints name no node are left out of the drawing.
pub fn render_flow_chart(
    flows: &[FlowRecord],
    nodes: &[FlowNode],
    variant: &VariantConfig,
    theme: &Theme,
) -> FlowArtifact {
    let count = nodes.len();
    let ordering = variant.node_ordering;

    let mut drawn: Vec<Option<FlowNode>> = vec![None; count];
    for (index, node) in nodes.iter().enumerate() {
        if let Some(position) = ordering.position(index, count) {
            drawn[position] = Some(node.clone());
        }
    }

    let links = flows
        .iter()
        .enumerate()
        .filter_map(|(edge, flow)| {
            let source = ordering.position(flow.source, count);
            let target = ordering.position(flow.target, count);
            match (source, target) {
                (Some(source), Some(target)) => Some(DrawnLink {
                    source,
                    target,
                    value: flow.value,
                    color: theme.link_color(edge),
                }),
                _ => {
                    warn!(
                        edge,
                        source = flow.source,
                        target = flow.target,
                        nodes = count,
                        "skipping flow edge with an unknown endpoint"
                    );
                    None
                }
            }
        })
        .collect();

    FlowArtifact {
        title: FLOW_TITLE.to_string(),
        nodes: drawn.into_iter().flatten().collect(),
        links,
        ordering,
        height: FLOW_HEIGHT,
        theme: theme.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::DashboardData;
    use crate::dashboard::variant::VariantName;

    #[test]
    fn declared_order_keeps_literal_indices() {
        let data = DashboardData::standard();
        let flow = render_flow_chart(
            &data.flows,
            &data.flow_nodes,
            &VariantConfig::default(),
            &Theme::dark(),
        );
        let figure = flow.figure();
        let trace = &figure["data"][0];

        assert_eq!(trace["type"], "sankey");
        assert_eq!(trace["node"]["label"][0], "High-Income Donors");
        assert_eq!(trace["link"]["source"], json!([0, 0, 3]));
        assert_eq!(trace["link"]["target"], json!([2, 3, 1]));
        assert_eq!(trace["link"]["value"], json!([120.0, 120.0, 120.0]));
        assert_eq!(trace["node"]["pad"], 20);
        assert_eq!(trace["node"]["thickness"], 30);
    }

    #[test]
    fn reversed_order_remaps_edges_onto_the_same_labels() {
        let data = DashboardData::standard();
        let flow = render_flow_chart(
            &data.flows,
            &data.flow_nodes,
            &VariantName::Ember.config(),
            &Theme::dark(),
        );

        assert_eq!(flow.nodes[0].label, "Donation Mechanism");
        assert_eq!(flow.nodes[3].label, "High-Income Donors");
        let first = &flow.links[0];
        assert_eq!(flow.nodes[first.source].label, "High-Income Donors");
        assert_eq!(flow.nodes[first.target].label, "NUCLIREGEN Therapies");
        assert_eq!(flow.outflow("High-Income Donors"), Some(240.0));
    }

    #[test]
    fn totals_for_unknown_labels_are_absent() {
        let data = DashboardData::standard();
        let flow = render_flow_chart(
            &data.flows,
            &data.flow_nodes,
            &VariantConfig::default(),
            &Theme::dark(),
        );
        assert_eq!(flow.outflow("Insurers"), None);
        assert_eq!(flow.inflow("Low-Income Patients"), Some(120.0));
        assert_eq!(flow.outflow("Low-Income Patients"), Some(0.0));
    }

    #[test]
    fn dangling_edges_are_dropped_in_either_order() {
        let mut data = DashboardData::standard();
        data.flows[0].target = 7;

        for variant in [VariantConfig::default(), VariantName::Ember.config()] {
            let flow = render_flow_chart(&data.flows, &data.flow_nodes, &variant, &Theme::dark());
            assert_eq!(flow.nodes.len(), 4);
            assert_eq!(flow.links.len(), 2);
            assert!(flow
                .links
                .iter()
                .all(|link| link.source < 4 && link.target < 4));
            assert_eq!(flow.outflow("High-Income Donors"), Some(120.0));
            assert_eq!(flow.inflow("NUCLIREGEN Therapies"), Some(0.0));
        }
    }
}
