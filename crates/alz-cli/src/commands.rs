use anyhow::{Context, Result};

use alz_cli::RunResult;
use alz_cli::pipeline::run_analysis;
use alz_cli::summary::{hypotheses_table, print_summary};

use crate::cli::{OutputFormatArg, RunArgs};

pub fn run_hypotheses() {
    println!("{}", hypotheses_table());
}

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let result = run_analysis(&args.to_config())?;
    match args.format {
        OutputFormatArg::Table => print_summary(&result),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize run result")?;
            println!("{json}");
        }
    }
    Ok(result)
}
