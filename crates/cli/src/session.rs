//! Line-oriented calculator session.
//!
//! Drives a [`ShapeScreen`] from text commands, one per line:
//!
//! ```text
//! set <field> <text>   replace a field (fields count from 1)
//! unit <unit>          switch the display unit
//! calc                 validate and calculate
//! clear                empty the form
//! copy                 show the clipboard text
//! show                 print the form and state
//! help                 list commands
//! quit                 end the session
//! ```

use luas_calc::{
    ExportOptions, MeasurementUnit, NumberFormatter, ScreenState, Shape, ShapeScreen,
};
use luas_telemetry::{metrics, names, Timer};
use tracing::debug;

use crate::output::Reply;
use crate::render::result_text;

const HELP: &str = "\
set <field> <text>   isi kolom (mulai dari 1)
unit <unit>          ganti satuan (mm, cm, m, km, in, ft)
calc                 hitung
clear                kosongkan form
copy                 teks untuk clipboard
show                 tampilkan form
quit                 keluar";

/// Calculator session for one shape.
#[derive(Debug, Clone)]
pub struct ScreenSession {
    screen: ShapeScreen,
    export: ExportOptions,
}

impl ScreenSession {
    /// Session for `shape`, starting in `unit`.
    pub fn new(shape: Shape, unit: MeasurementUnit, export: ExportOptions) -> Self {
        Self {
            screen: ShapeScreen::new(shape, unit).with_formatter(export.formatter),
            export,
        }
    }

    /// The screen being driven.
    pub fn screen(&self) -> &ShapeScreen {
        &self.screen
    }

    fn formatter(&self) -> &NumberFormatter {
        &self.export.formatter
    }

    /// Greeting listing the fields of the shape.
    pub fn banner(&self) -> String {
        let def = self.screen.shape().definition();
        let fields: Vec<String> = def
            .dimensions
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{}={label}", i + 1))
            .collect();
        format!(
            "{} [{}] kolom: {}",
            def.title,
            self.screen.unit(),
            fields.join(", ")
        )
    }

    /// Runs one command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!(command, "session command");

        match command {
            "" => Reply::Silent,
            "set" => self.set(rest),
            "unit" => self.unit(rest.trim()),
            "calc" => self.calculate(),
            "clear" => {
                self.screen.clear();
                Reply::Info("Form dikosongkan".to_string())
            }
            "copy" => match self.screen.clipboard_text(&self.export) {
                Some(text) => Reply::Output(text),
                None => Reply::Error("Belum ada hasil untuk disalin".to_string()),
            },
            "show" => Reply::Output(self.show()),
            "help" => Reply::Output(HELP.to_string()),
            "quit" | "exit" => Reply::Quit,
            other => Reply::Error(format!("Perintah tidak dikenal: {other}")),
        }
    }

    fn set(&mut self, args: &str) -> Reply {
        let args = args.trim_start();
        let (index, text) = args.split_once(char::is_whitespace).unwrap_or((args, ""));

        let Some(slot) = index.parse::<usize>().ok().and_then(|i| i.checked_sub(1)) else {
            return Reply::Error(format!("Nomor kolom tidak valid: {index}"));
        };
        if self.screen.set_input(slot, text.trim()) {
            Reply::Silent
        } else {
            Reply::Error(format!(
                "{} hanya punya {} kolom",
                self.screen.shape().definition().title,
                self.screen.inputs().len()
            ))
        }
    }

    fn unit(&mut self, name: &str) -> Reply {
        let unit = match name.parse::<MeasurementUnit>() {
            Ok(unit) => unit,
            Err(e) => return Reply::Error(e.to_string()),
        };

        metrics().increment(names::UNIT_SWITCHES);
        match self.screen.set_unit(unit) {
            ScreenState::Computed(result) => Reply::Output(result_text(result, &self.export.formatter)),
            ScreenState::Error(e) => Reply::Error(e.to_string()),
            ScreenState::Idle => Reply::Info(format!("Satuan: {}", unit.display_name())),
        }
    }

    fn calculate(&mut self) -> Reply {
        let timer = Timer::start(names::CALC_DURATION_MS);
        let reply = match self.screen.calculate() {
            ScreenState::Computed(result) => {
                metrics().increment(names::CALC_SUCCESS);
                Reply::Output(result_text(result, &self.export.formatter))
            }
            ScreenState::Error(e) => {
                metrics().increment(names::CALC_FAILURE);
                Reply::Error(e.to_string())
            }
            ScreenState::Idle => Reply::Silent,
        };
        timer.stop();
        reply
    }

    fn show(&self) -> String {
        let def = self.screen.shape().definition();
        let mut lines: Vec<String> = def
            .dimensions
            .iter()
            .zip(self.screen.inputs())
            .enumerate()
            .map(|(i, (label, text))| format!("{}. {label}: {text}", i + 1))
            .collect();

        lines.push(format!("Satuan: {}", self.screen.unit()));
        match self.screen.state() {
            ScreenState::Idle => {}
            ScreenState::Error(e) => lines.push(format!("Error: {e}")),
            ScreenState::Computed(result) => lines.push(result_text(result, self.formatter())),
        }
        lines.join("\n")
    }
}
