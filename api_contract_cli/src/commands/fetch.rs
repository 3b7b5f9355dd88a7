use anyhow::{bail, Context, Result};
use api_contract::{Client, Error};
use clap::Args;

use crate::output::{print_api_error, print_envelope, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    /// API base URL (e.g. https://api.example.com)
    #[arg(long)]
    pub base_url: String,

    /// Path to request (e.g. /items)
    #[arg(long)]
    pub path: String,

    /// Query parameter as key=value; may be repeated
    #[arg(long = "param")]
    pub params: Vec<String>,
}

fn parse_params(raw: &[String]) -> Result<Vec<(&str, &str)>> {
    raw.iter()
        .map(|p| {
            p.split_once('=')
                .with_context(|| format!("invalid --param '{}', expected key=value", p))
        })
        .collect()
}

pub async fn run(args: &FetchArgs, format: &OutputFormat) -> Result<()> {
    let params = parse_params(&args.params)?;
    let client = Client::new(&args.base_url);

    match client.get::<serde_json::Value>(&args.path, &params).await {
        Ok(resp) => {
            print_envelope(&resp, format);
            Ok(())
        }
        Err(Error::Api { status, error }) => {
            print_api_error(&error, format);
            bail!("request failed with status {}", status)
        }
        Err(e) => Err(e.into()),
    }
}
