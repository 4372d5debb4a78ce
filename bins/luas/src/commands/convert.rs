//! Convert command - length conversion between units

use anyhow::Result;
use clap::Args;
use luas_calc::parser::{parse_number, ParsedInput};
use luas_calc::convert;
use luas_cli::{render, OutputFormat};
use luas_core::{Error, ErrorCode};
use serde::Serialize;

use super::{parse_unit, print_json, Context};

#[derive(Args)]
pub struct ConvertArgs {
    /// Length to convert
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Unit of the value
    from: String,

    /// Unit to convert to
    to: String,

    /// Maximum fractional digits
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=10))]
    precision: Option<u8>,
}

/// JSON output for a conversion
#[derive(Debug, Serialize)]
struct JsonConversion {
    value: f64,
    from: &'static str,
    to: &'static str,
    result: f64,
    text: String,
}

/// Run convert command
pub fn run(ctx: &Context<'_>, args: ConvertArgs) -> Result<()> {
    let value = parse_value(&args.value)?;
    let from = parse_unit(&args.from)?;
    let to = parse_unit(&args.to)?;

    let result = convert(value, from, to);
    let text = render::conversion_text(value, from, result, to, &ctx.formatter(args.precision));

    match ctx.format {
        OutputFormat::Json => print_json(&JsonConversion {
            value,
            from: from.symbol(),
            to: to.symbol(),
            result,
            text,
        }),
        OutputFormat::Text => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Reads a number the way form fields are read.
pub fn parse_value(raw: &str) -> Result<f64> {
    match parse_number(raw) {
        ParsedInput::Number(value) => Ok(value),
        ParsedInput::Missing => Err(Error::new(ErrorCode::EmptyInput, "Nilai tidak boleh kosong").into()),
        ParsedInput::Malformed => Err(Error::new(ErrorCode::InvalidFormat, "Masukkan angka yang valid")
            .with_context(format!("'{raw}'"))
            .into()),
    }
}
