use super::domain::DashboardData;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetTable {
    Countries,
    Costs,
    Flows,
}

impl DatasetTable {
    pub const fn ordered() -> [Self; 3] {
        [Self::Countries, Self::Costs, Self::Flows]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::Costs => "costs",
            Self::Flows => "flows",
        }
    }
}

impl fmt::Display for DatasetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dataset '{0}' (expected countries, costs, or flows)")]
pub struct UnknownTable(pub String);

impl FromStr for DatasetTable {
    type Err = UnknownTable;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().trim_end_matches(".csv").to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|table| table.as_str() == wanted)
            .ok_or_else(|| UnknownTable(value.trim().to_string()))
    }
}

#[derive(Debug, Serialize)]
struct FlowRow<'a> {
    source: usize,
    target: usize,
    source_label: &'a str,
    target_label: &'a str,
    value: f64,
}

/// Writes one table as CSV with a header row.
pub fn write_table<W: Write>(
    data: &DashboardData,
    table: DatasetTable,
    sink: W,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(sink);

    match table {
        DatasetTable::Countries => {
            for country in &data.countries {
                writer.serialize(country)?;
            }
        }
        DatasetTable::Costs => {
            for cost in &data.costs {
                writer.serialize(cost)?;
            }
        }
        DatasetTable::Flows => {
            for flow in &data.flows {
                let label = |index: usize| {
                    data.flow_nodes
                        .get(index)
                        .map(|node| node.label)
                        .unwrap_or_default()
                };
                writer.serialize(FlowRow {
                    source: flow.source,
                    target: flow.target,
                    source_label: label(flow.source),
                    target_label: label(flow.target),
                    value: flow.value,
                })?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn table_csv(data: &DashboardData, table: DatasetTable) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_table(data, table, &mut buffer)?;
    // Every field written above is UTF-8 already.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countries_export_with_header() {
        let csv = table_csv(&DashboardData::standard(), DatasetTable::Countries)
            .expect("countries export");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("name,code,prevalence,therapy_access_pct")
        );
        assert_eq!(lines.next(), Some("Ecuador,ECU,32,25"));
        assert_eq!(csv.lines().count(), 8);
    }

    #[test]
    fn flows_export_resolves_labels() {
        let csv =
            table_csv(&DashboardData::standard(), DatasetTable::Flows).expect("flows export");
        assert!(csv.starts_with("source,target,source_label,target_label,value\n"));
        assert!(csv.contains("3,1,Donation Mechanism,Low-Income Patients,"));
    }

    #[test]
    fn parses_table_names_with_extension() {
        assert_eq!("costs.csv".parse::<DatasetTable>(), Ok(DatasetTable::Costs));
        assert_eq!("Flows".parse::<DatasetTable>(), Ok(DatasetTable::Flows));
        assert!("patients".parse::<DatasetTable>().is_err());
    }
}
