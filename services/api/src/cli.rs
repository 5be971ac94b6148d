use crate::demo::{run_catalog_report, run_demo, CatalogReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use datanext::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DataNext Assessment Service",
    about = "Score, classify, and serve the legacy report migration catalog",
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
    /// Work with the generated assessment catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run an end-to-end CLI demo covering scoring, routing, and tuning
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print the catalog roll-up and optionally export the full catalog
    Report(CatalogReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured catalog size
    #[arg(long)]
    pub(crate) catalog_size: Option<usize>,
    /// Override the configured catalog seed
    #[arg(long)]
    pub(crate) catalog_seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::Report(args),
        } => run_catalog_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
