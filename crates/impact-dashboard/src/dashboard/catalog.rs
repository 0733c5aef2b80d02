use super::domain::{CountryRecord, DashboardData, FlowNode, FlowRecord, TherapyCostRecord};

impl DashboardData {
    /// The literal tables shown on the impact dashboard.
    pub fn standard() -> Self {
        Self {
            countries: standard_countries(),
            costs: standard_costs(),
            flow_nodes: standard_flow_nodes(),
            flows: standard_flows(),
        }
    }
}

fn standard_countries() -> Vec<CountryRecord> {
    vec![
        CountryRecord {
            name: "Ecuador",
            code: "ECU",
            prevalence: 32,
            therapy_access_pct: 25,
        },
        CountryRecord {
            name: "USA",
            code: "USA",
            prevalence: 75,
            therapy_access_pct: 90,
        },
        CountryRecord {
            name: "India",
            code: "IND",
            prevalence: 150,
            therapy_access_pct: 30,
        },
        CountryRecord {
            name: "Nigeria",
            code: "NGA",
            prevalence: 110,
            therapy_access_pct: 20,
        },
        CountryRecord {
            name: "Peru",
            code: "PER",
            prevalence: 40,
            therapy_access_pct: 40,
        },
        CountryRecord {
            name: "South Africa",
            code: "ZAF",
            prevalence: 52,
            therapy_access_pct: 35,
        },
        CountryRecord {
            name: "Germany",
            code: "DEU",
            prevalence: 28,
            therapy_access_pct: 80,
        },
    ]
}

fn standard_costs() -> Vec<TherapyCostRecord> {
    vec![
        TherapyCostRecord {
            therapy: "NUCLIREGEN-P",
            cost_usd: 8_000.0,
        },
        TherapyCostRecord {
            therapy: "Lonafarnib",
            cost_usd: 100_000.0,
        },
        TherapyCostRecord {
            therapy: "CRISPR",
            cost_usd: 500_000.0,
        },
    ]
}

fn standard_flow_nodes() -> Vec<FlowNode> {
    vec![
        FlowNode {
            label: "High-Income Donors",
            color: "#00f7ff",
        },
        FlowNode {
            label: "Low-Income Patients",
            color: "#ffcf00",
        },
        FlowNode {
            label: "NUCLIREGEN Therapies",
            color: "#7efff5",
        },
        FlowNode {
            label: "Donation Mechanism",
            color: "#fc46aa",
        },
    ]
}

// One-for-one model: every donor purchase funds therapy and a matched donation.
fn standard_flows() -> Vec<FlowRecord> {
    vec![
        FlowRecord {
            source: 0,
            target: 2,
            value: 120.0,
        },
        FlowRecord {
            source: 0,
            target: 3,
            value: 120.0,
        },
        FlowRecord {
            source: 3,
            target: 1,
            value: 120.0,
        },
    ]
}
