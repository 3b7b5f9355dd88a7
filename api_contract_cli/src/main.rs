mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "apicontract")]
#[command(about = "Inspect API envelopes, error payloads and request parameters")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized value of a query parameter
    Param(commands::param::ParamArgs),
    /// Build a paginated response envelope
    Paginate(commands::paginate::PaginateArgs),
    /// Summarize an error payload read from a file or stdin
    InspectError(commands::inspect_error::InspectErrorArgs),
    /// Request a path and print the decoded envelope
    Fetch(commands::fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_contract=info".parse::<Directive>()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Param(args) => commands::param::run(args, &format)?,
        Commands::Paginate(args) => commands::paginate::run(args, &format)?,
        Commands::InspectError(args) => commands::inspect_error::run(args, &format)?,
        Commands::Fetch(args) => commands::fetch::run(args, &format).await?,
    }

    Ok(())
}
