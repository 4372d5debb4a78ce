//! Units command - list supported length units

use anyhow::Result;
use luas_cli::{render, OutputFormat, Status};

use super::{print_json, Context};

/// Run units command
pub fn run(ctx: &Context<'_>) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        return print_json(&render::units_json());
    }

    Status::header("Satuan");
    println!("{}", render::units_text());
    Ok(())
}
