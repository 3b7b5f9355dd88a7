use std::path::PathBuf;

use anyhow::{Context, Result};
use api_contract::decode_error;
use api_contract::types::ApiError;
use clap::Args;

use crate::output::{print_api_error, OutputFormat};

#[derive(Args)]
pub struct InspectErrorArgs {
    /// Read the payload from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

fn read_payload(args: &InspectErrorArgs) -> Result<ApiError> {
    let body = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
    };
    Ok(decode_error(&body)?)
}

pub fn run(args: &InspectErrorArgs, format: &OutputFormat) -> Result<()> {
    let error = read_payload(args)?;
    print_api_error(&error, format);
    Ok(())
}
