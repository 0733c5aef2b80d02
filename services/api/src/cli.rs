use crate::report::{run_export, run_render, run_summary, ExportArgs, RenderArgs, SummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use impact_dashboard::dashboard::VariantName;
use impact_dashboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Impact Dashboard",
    about = "Serve or render the global and economic impact dashboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Write the dashboard as a standalone HTML document
    Render(RenderArgs),
    /// Print a text summary of the three charts
    Summary(SummaryArgs),
    /// Write one of the source tables as CSV to stdout
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Variant served when a request does not ask for one
    #[arg(long, value_parser = crate::infra::parse_variant)]
    pub(crate) variant: Option<VariantName>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Summary(args) => run_summary(args),
        Command::Export(args) => run_export(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_dashboard::dashboard::DatasetTable;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["impact-dashboard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_variant_and_table_arguments() {
        let cli = Cli::try_parse_from(["impact-dashboard", "serve", "--variant", "atlas"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.variant, Some(VariantName::Atlas)),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["impact-dashboard", "export", "flows"]).expect("parses");
        match cli.command {
            Some(Command::Export(args)) => assert_eq!(args.table, DatasetTable::Flows),
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["impact-dashboard", "render", "--variant", "neon"]).is_err());
    }
}
