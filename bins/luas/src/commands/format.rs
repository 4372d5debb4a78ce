//! Format command - presentation formatting of a number

use anyhow::Result;
use clap::Args;
use luas_cli::OutputFormat;
use serde_json::json;

use super::convert::parse_value;
use super::{print_json, Context};

#[derive(Args)]
pub struct FormatArgs {
    /// Number to format
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Maximum fractional digits
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=10))]
    precision: Option<u8>,

    /// Leave out thousands separators
    #[arg(long)]
    no_grouping: bool,
}

/// Run format command
pub fn run(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let value = parse_value(&args.value)?;
    let mut formatter = ctx.formatter(args.precision);
    if args.no_grouping {
        formatter = formatter.with_grouping(false);
    }
    let text = formatter.format(value);

    match ctx.format {
        OutputFormat::Json => print_json(&json!({ "value": value, "text": text })),
        OutputFormat::Text => {
            println!("{text}");
            Ok(())
        }
    }
}
