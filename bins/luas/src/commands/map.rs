//! Map command - interactive marker board on stdin

use std::io::{self, BufRead};

use anyhow::Result;
use luas_cli::errors::from_geo;
use luas_cli::map::MapSession;
use luas_cli::render::camera_text;
use luas_cli::{OutputFormat, Reply, Status};

use super::Context;

/// Run map command
pub async fn run(ctx: &Context<'_>) -> Result<()> {
    let mut session = MapSession::new(ctx.map_settings(), ctx.location_timeout())
        .with_formatter(ctx.formatter(None));

    if ctx.format == OutputFormat::Text {
        Status::header("Peta");
        println!("{}", camera_text(&session.board().camera()));
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let reply = session.execute(&line).await;
        if reply == Reply::Quit {
            break;
        }
        reply.print(ctx.format)?;
    }

    // a failed last location request sets the exit status
    if let Some(err) = session.location_error() {
        return Err(from_geo(err).into());
    }
    Ok(())
}
