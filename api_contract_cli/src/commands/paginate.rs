use anyhow::{bail, Result};
use api_contract::types::{ApiResponse, Meta};
use clap::Args;
use serde_json::Value;

use crate::output::{print_envelope, OutputFormat};

#[derive(Args)]
pub struct PaginateArgs {
    /// Total number of items across all pages
    #[arg(long)]
    pub total: i64,

    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Items per page
    #[arg(long, default_value = "20")]
    pub limit: i64,

    /// Optional status message
    #[arg(long)]
    pub message: Option<String>,
}

fn build_envelope(args: &PaginateArgs) -> Result<ApiResponse<Vec<Value>>> {
    if args.total < 0 {
        bail!("--total cannot be negative");
    }
    if args.page < 1 {
        bail!("--page must be at least 1");
    }
    if args.limit < 1 {
        bail!("--limit must be at least 1");
    }

    let mut resp =
        ApiResponse::new(Vec::new()).with_meta(Meta::new(args.total, args.page, args.limit));
    if let Some(message) = &args.message {
        resp = resp.with_message(message.as_str());
    }
    Ok(resp)
}

pub fn run(args: &PaginateArgs, format: &OutputFormat) -> Result<()> {
    let resp = build_envelope(args)?;
    print_envelope(&resp, format);
    Ok(())
}
