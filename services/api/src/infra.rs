use chrono::{DateTime, Utc};
use impact_dashboard::dashboard::{
    DashboardData, DashboardPage, DatasetTable, PageConfig, UnknownVariant, VariantConfig,
    VariantName,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) default_variant: VariantName,
    pub(crate) page: Arc<PageConfig>,
    pub(crate) data: Arc<DashboardData>,
}

impl AppState {
    pub(crate) fn new(
        metrics: PrometheusHandle,
        default_variant: VariantName,
        page: PageConfig,
        data: DashboardData,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            started_at: Utc::now(),
            default_variant,
            page: Arc::new(page),
            data: Arc::new(data),
        }
    }

    pub(crate) fn variant(&self, requested: Option<&str>) -> Result<VariantConfig, UnknownVariant> {
        match requested {
            Some(raw) => Ok(raw.parse::<VariantName>()?.config()),
            None => Ok(self.default_variant.config()),
        }
    }

    pub(crate) fn compose(&self, requested: Option<&str>) -> Result<DashboardPage, UnknownVariant> {
        let variant = self.variant(requested)?;
        Ok(DashboardPage::compose(
            self.page.as_ref().clone(),
            &self.data,
            variant,
        ))
    }
}

/// `?variant=` on every rendering endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VariantQuery {
    #[serde(default)]
    pub(crate) variant: Option<String>,
}

impl VariantQuery {
    pub(crate) fn requested(&self) -> Option<&str> {
        self.variant
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

pub(crate) fn parse_variant(raw: &str) -> Result<VariantName, String> {
    raw.parse::<VariantName>().map_err(|err| err.to_string())
}

pub(crate) fn parse_table(raw: &str) -> Result<DatasetTable, String> {
    raw.parse::<DatasetTable>().map_err(|err| err.to_string())
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    AppState::new(
        recorder.handle(),
        VariantName::default(),
        PageConfig::standard(),
        DashboardData::standard(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_falls_back_to_default_variant() {
        let state = test_state();
        let query = VariantQuery {
            variant: Some("  ".to_string()),
        };
        let variant = state.variant(query.requested()).expect("default applies");
        assert_eq!(variant.name, VariantName::Orbital);
    }

    #[test]
    fn explicit_query_selects_preset() {
        let state = test_state();
        let page = state.compose(Some("mercator")).expect("known preset");
        assert_eq!(page.variant.name, VariantName::Mercator);
        assert!(state.compose(Some("neon")).is_err());
    }

    #[test]
    fn cli_parsers_report_readable_errors() {
        assert_eq!(parse_variant("ember"), Ok(VariantName::Ember));
        assert!(parse_table("patients")
            .expect_err("unknown table")
            .contains("patients"));
    }
}
