use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub name: &'static str,
    /// ISO 3166-1 alpha-3 code used as the map location key.
    pub code: &'static str,
    pub prevalence: u32,
    pub therapy_access_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TherapyCostRecord {
    pub therapy: &'static str,
    pub cost_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowRecord {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("country '{name}' has code '{code}', expected three uppercase ASCII letters")]
    InvalidCountryCode { name: &'static str, code: &'static str },
    #[error("country code '{0}' is listed more than once")]
    DuplicateCountryCode(&'static str),
    #[error("country '{name}' reports {pct}% therapy access, expected 0-100")]
    AccessOutOfRange { name: &'static str, pct: u8 },
    #[error("therapy '{therapy}' has cost {cost}, expected a finite non-negative amount")]
    InvalidCost { therapy: &'static str, cost: f64 },
    #[error("flow #{edge} references node {index}, but only {nodes} nodes exist")]
    UnknownNode {
        edge: usize,
        index: usize,
        nodes: usize,
    },
    #[error("flow #{edge} loops node {index} back onto itself")]
    SelfLoop { edge: usize, index: usize },
    #[error("flow #{edge} carries {value}, expected a finite non-negative amount")]
    InvalidFlowValue { edge: usize, value: f64 },
    #[error("cost table has {found} therapies, expected {COST_RECORDS}")]
    CostCount { found: usize },
    #[error("flow diagram has {found} nodes, expected {MIN_FLOW_NODES}-{MAX_FLOW_NODES}")]
    FlowNodeCount { found: usize },
    #[error("flow diagram has {found} edges, expected {FLOW_EDGES}")]
    FlowEdgeCount { found: usize },
}

pub const COST_RECORDS: usize = 3;
pub const MIN_FLOW_NODES: usize = 3;
pub const MAX_FLOW_NODES: usize = 4;
pub const FLOW_EDGES: usize = 3;

/// The three independent tables behind the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub countries: Vec<CountryRecord>,
    pub costs: Vec<TherapyCostRecord>,
    pub flow_nodes: Vec<FlowNode>,
    pub flows: Vec<FlowRecord>,
}

impl DashboardData {
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.costs.len() != COST_RECORDS {
            return Err(DatasetError::CostCount {
                found: self.costs.len(),
            });
        }
        if !(MIN_FLOW_NODES..=MAX_FLOW_NODES).contains(&self.flow_nodes.len()) {
            return Err(DatasetError::FlowNodeCount {
                found: self.flow_nodes.len(),
            });
        }
        if self.flows.len() != FLOW_EDGES {
            return Err(DatasetError::FlowEdgeCount {
                found: self.flows.len(),
            });
        }

        let mut seen = HashSet::new();
        for country in &self.countries {
            let valid_code =
                country.code.len() == 3 && country.code.bytes().all(|b| b.is_ascii_uppercase());
            if !valid_code {
                return Err(DatasetError::InvalidCountryCode {
                    name: country.name,
                    code: country.code,
                });
            }
            if !seen.insert(country.code) {
                return Err(DatasetError::DuplicateCountryCode(country.code));
            }
            if country.therapy_access_pct > 100 {
                return Err(DatasetError::AccessOutOfRange {
                    name: country.name,
                    pct: country.therapy_access_pct,
                });
            }
        }

        for cost in &self.costs {
            if !cost.cost_usd.is_finite() || cost.cost_usd < 0.0 {
                return Err(DatasetError::InvalidCost {
                    therapy: cost.therapy,
                    cost: cost.cost_usd,
                });
            }
        }

        let nodes = self.flow_nodes.len();
        for (edge, flow) in self.flows.iter().enumerate() {
            for index in [flow.source, flow.target] {
                if index >= nodes {
                    return Err(DatasetError::UnknownNode { edge, index, nodes });
                }
            }
            if flow.source == flow.target {
                return Err(DatasetError::SelfLoop {
                    edge,
                    index: flow.source,
                });
            }
            if !flow.value.is_finite() || flow.value < 0.0 {
                return Err(DatasetError::InvalidFlowValue {
                    edge,
                    value: flow.value,
                });
            }
        }

        Ok(())
    }
}
