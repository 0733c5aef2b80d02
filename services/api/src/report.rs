use clap::Args;
use impact_dashboard::config::AppConfig;
use impact_dashboard::dashboard::{
    write_table, Artifact, DashboardData, DashboardPage, DatasetTable, PageConfig, VariantName,
};
use impact_dashboard::error::AppError;
use std::io::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Presentation variant (defaults to APP_DASHBOARD_VARIANT or orbital)
    #[arg(long, value_parser = crate::infra::parse_variant)]
    pub(crate) variant: Option<VariantName>,
    /// Destination file; stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    /// Presentation variant (defaults to APP_DASHBOARD_VARIANT or orbital)
    #[arg(long, value_parser = crate::infra::parse_variant)]
    pub(crate) variant: Option<VariantName>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Table to export: countries, costs, or flows
    #[arg(value_parser = crate::infra::parse_table)]
    pub(crate) table: DatasetTable,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let page = compose_page(args.variant)?;
    let html = page.to_html();

    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!(
                "Wrote {} dashboard to {}",
                page.variant.name,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let page = compose_page(args.variant)?;
    print!("{}", summarize(&page));
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let data = DashboardData::standard();
    data.validate()?;
    write_table(&data, args.table, std::io::stdout().lock())?;
    Ok(())
}

fn compose_page(variant: Option<VariantName>) -> Result<DashboardPage, AppError> {
    let variant = match variant {
        Some(variant) => variant,
        None => AppConfig::load()?.dashboard.variant,
    };

    let data = DashboardData::standard();
    data.validate()?;
    Ok(DashboardPage::compose(
        PageConfig::standard(),
        &data,
        variant.config(),
    ))
}

fn summarize(page: &DashboardPage) -> String {
    let mut lines = vec![
        page.config.heading.to_string(),
        format!("Variant: {}", page.variant.name),
    ];

    for section in &page.sections {
        lines.push(String::new());
        lines.push(format!(
            "{} ({} elements)",
            section.heading,
            section.artifact.element_count()
        ));

        match &section.artifact {
            Artifact::Map(map) => {
                lines.push(format!("Projection: {}", map.projection.plotly_type()));
                lines.extend(map.regions.iter().map(|region| {
                    format!(
                        "- {} ({}): prevalence {}, therapy access {}%",
                        region.name, region.code, region.prevalence, region.therapy_access_pct
                    )
                }));
            }
            Artifact::CostChart(chart) => {
                lines.extend(
                    chart
                        .bars
                        .iter()
                        .map(|bar| format!("- {}: {}", bar.therapy, bar.label)),
                );
            }
            Artifact::Flow(flow) => {
                lines.extend(flow.links.iter().map(|link| {
                    format!(
                        "- {} -> {}: {}",
                        flow.nodes[link.source].label, flow.nodes[link.target].label, link.value
                    )
                }));
                lines.extend(flow.nodes.iter().map(|node| {
                    format!(
                        "  {}: out {}, in {}",
                        node.label,
                        flow.outflow(node.label).unwrap_or_default(),
                        flow.inflow(node.label).unwrap_or_default()
                    )
                }));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
