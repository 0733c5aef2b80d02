mod catalog;
pub mod domain;
pub mod export;
mod format;
pub mod page;
pub mod render;
pub mod theme;
pub mod variant;

pub use domain::{
    CountryRecord, DashboardData, DatasetError, FlowNode, FlowRecord, TherapyCostRecord,
};
pub use export::{table_csv, write_table, DatasetTable, UnknownTable};
pub use format::format_usd;
pub use page::{DashboardPage, PageConfig, PageLayout, PageView, SectionView};
pub use render::{Artifact, ArtifactKind};
pub use theme::Theme;
pub use variant::{UnknownVariant, VariantConfig, VariantName};
