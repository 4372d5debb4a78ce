//! Calc command - one calculation from command-line values

use anyhow::Result;
use clap::Args;
use luas_calc::{export_text, ScreenState, ShapeScreen};
use luas_cli::errors::from_calc;
use luas_cli::{render, OutputFormat};
use luas_core::Error;
use luas_telemetry::{metrics, names};
use serde_json::json;
use tracing::debug;

use super::{parse_shape, parse_unit, print_json, Context};

#[derive(Args)]
pub struct CalcArgs {
    /// Shape key or Indonesian name (see `luas shapes`)
    shape: String,

    /// One value per input field, in order; `7,5` and `7.5` are both accepted
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Unit of the values (defaults to display.default_unit)
    #[arg(short, long)]
    unit: Option<String>,

    /// Re-express the result in another unit
    #[arg(long)]
    to: Option<String>,

    /// Maximum fractional digits
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=10))]
    precision: Option<u8>,

    /// Print the clipboard text instead of the result block
    #[arg(long)]
    copy: bool,
}

/// Run calc command
pub fn run(ctx: &Context<'_>, args: CalcArgs) -> Result<()> {
    let shape = parse_shape(&args.shape)?;
    let unit = ctx.unit_or_default(args.unit.as_deref())?;
    let target = args.to.as_deref().map(parse_unit).transpose()?;
    let export = ctx.export_options(args.precision);

    let def = shape.definition();
    if args.values.len() != def.arity() {
        return Err(Error::validation(format!(
            "{} membutuhkan {} nilai: {}",
            def.title,
            def.arity(),
            def.dimensions.join(", ")
        ))
        .with_suggestion(format!("luas calc {} {}", def.key, vec!["<nilai>"; def.arity()].join(" ")))
        .into());
    }

    let mut screen = ShapeScreen::new(shape, unit).with_formatter(export.formatter);
    for (i, value) in args.values.iter().enumerate() {
        screen.set_input(i, value.as_str());
    }

    {
        luas_telemetry::timed_span!("calc.duration_ms", shape = %shape, unit = %unit);
        if let ScreenState::Error(e) = screen.calculate() {
            metrics().increment(names::CALC_FAILURE);
            return Err(from_calc(e).into());
        }
        metrics().increment(names::CALC_SUCCESS);
    }

    if let Some(target) = target {
        debug!(to = %target, "re-expressing result");
        metrics().increment(names::UNIT_SWITCHES);
        if let ScreenState::Error(e) = screen.set_unit(target) {
            return Err(from_calc(e).into());
        }
    }

    let result = screen
        .result()
        .ok_or_else(|| Error::calculation("Terjadi kesalahan dalam perhitungan"))?;

    match ctx.format {
        OutputFormat::Json => {
            let mut value = render::result_json(result, &export.formatter);
            if args.copy {
                value["clipboard"] = json!(export_text(result, &export));
            }
            print_json(&value)
        }
        OutputFormat::Text => {
            if args.copy {
                println!("{}", export_text(result, &export));
            } else {
                println!("{}", render::result_text(result, &export.formatter));
            }
            Ok(())
        }
    }
}
