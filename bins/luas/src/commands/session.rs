//! Session command - interactive calculator on stdin

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Args;
use luas_cli::session::ScreenSession;
use luas_cli::{OutputFormat, Reply, Status};

use super::{parse_shape, Context};

#[derive(Args)]
pub struct SessionArgs {
    /// Shape key or Indonesian name
    shape: String,

    /// Starting unit (defaults to display.default_unit)
    #[arg(short, long)]
    unit: Option<String>,
}

/// Run session command
pub fn run(ctx: &Context<'_>, args: SessionArgs) -> Result<()> {
    let shape = parse_shape(&args.shape)?;
    let unit = ctx.unit_or_default(args.unit.as_deref())?;
    let mut session = ScreenSession::new(shape, unit, ctx.export_options(None));

    if ctx.format == OutputFormat::Text {
        Status::header(&session.banner());
    }

    for line in io::stdin().lock().lines() {
        let reply = session.execute(&line?);
        if reply == Reply::Quit {
            break;
        }
        reply.print(ctx.format)?;
    }
    Ok(())
}
