//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use std::io::{self, Write};

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |t| t.red()), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Answer of a session to one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Reply {
    /// Plain output such as a result block or a listing
    Output(String),
    /// An action completed
    Success(String),
    /// Neutral notice
    Info(String),
    /// The action was refused; the message is meant for the user
    Error(String),
    /// Nothing to print
    Silent,
    /// End the session
    Quit,
}

impl Reply {
    /// True for [`Reply::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Prints the reply in `format`.
    ///
    /// Text replies go through [`Status`]; JSON replies are one object per
    /// line on stdout.
    pub fn print(&self, format: OutputFormat) -> io::Result<()> {
        if matches!(self, Reply::Silent | Reply::Quit) {
            return Ok(());
        }

        match format {
            OutputFormat::Json => {
                let mut stdout = io::stdout().lock();
                serde_json::to_writer(&mut stdout, self)?;
                writeln!(stdout)
            }
            OutputFormat::Text => {
                match self {
                    Reply::Output(text) => println!("{text}"),
                    Reply::Success(text) => Status::success(text),
                    Reply::Info(text) => Status::info(text),
                    Reply::Error(text) => Status::error(text),
                    Reply::Silent | Reply::Quit => {}
                }
                Ok(())
            }
        }
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_secs_f32(5.5)), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_reply_json_shape() {
        let json = serde_json::to_value(Reply::Error("Sisi tidak boleh kosong".into())).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Sisi tidak boleh kosong");

        let json = serde_json::to_value(Reply::Silent).unwrap();
        assert_eq!(json["kind"], "silent");
        assert!(Reply::Error(String::new()).is_error());
    }
}
