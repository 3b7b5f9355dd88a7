use anyhow::Result;
use api_contract::{normalize_param, param_from_url};
use clap::Args;
use serde_json::Value;
use url::Url;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ParamArgs {
    /// Full request URL, including the query string
    #[arg(long)]
    pub url: String,

    /// Name of the query parameter
    #[arg(long)]
    pub name: String,
}

/// Raw and normalized forms of the parameter, as `{name, raw, value}`.
fn param_report(args: &ParamArgs) -> Result<Value> {
    let url = Url::parse(&args.url)?;
    let raw = param_from_url(&url, &args.name);
    let value = normalize_param(&raw);
    Ok(serde_json::json!({
        "name": args.name,
        "raw": raw,
        "value": value,
    }))
}

pub fn run(args: &ParamArgs, format: &OutputFormat) -> Result<()> {
    let report = param_report(args)?;
    match format {
        OutputFormat::Table => println!("{}", report["value"].as_str().unwrap_or_default()),
        OutputFormat::Json => print_json(&report),
    }
    Ok(())
}
