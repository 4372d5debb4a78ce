//! Shapes command - list supported shapes

use anyhow::Result;
use luas_calc::Shape;
use luas_cli::{render, OutputFormat, Status};

use super::{print_json, Context};

/// Run shapes command
pub fn run(ctx: &Context<'_>) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        return print_json(&render::shapes_json());
    }

    Status::header("Bangun Datar");
    println!("{}", render::shapes_text());
    println!();
    for shape in Shape::ALL {
        let def = shape.definition();
        println!("{}", def.title);
        for line in def.formula {
            println!("  {line}");
        }
    }
    Ok(())
}
