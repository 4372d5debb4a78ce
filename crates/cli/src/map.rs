//! Line-oriented map session.
//!
//! Drives a [`MarkerBoard`] from text commands. The device location comes
//! from a [`ManualLocationProvider`]: `locate` hands it a fix and then
//! waits on a one-shot request, exactly as a screen waiting on real
//! positioning hardware would.

use std::sync::Arc;
use std::time::{Duration, Instant};

use luas_calc::NumberFormatter;
use luas_geo::{
    request_current_location, request_current_location_within, Coordinate, GeoError, LocationFix,
    LocationProvider, ManualLocationProvider, MapSettings, Marker, MarkerBoard,
};
use luas_telemetry::{metrics, names, Timer};
use tracing::{debug, info};

use crate::output::{format_duration, Reply};
use crate::render::{camera_text, markers_text, nearest_text};

const DEFAULT_NEAREST: usize = 5;

const HELP: &str = "\
preview <lat> <lng>          lihat lokasi tanpa menambah marker
add <lat> <lng>              tambah marker
remove <id>                  hapus marker
clear                        hapus semua marker
locate <lat> <lng> [akurasi] lokasi perangkat
permission grant|deny        atur izin lokasi
nearest [n]                  marker terdekat
list                         daftar marker
camera                       posisi kamera
quit                         keluar";

/// Map session state.
#[derive(Debug)]
pub struct MapSession {
    board: MarkerBoard,
    provider: Arc<ManualLocationProvider>,
    timeout: Option<Duration>,
    formatter: NumberFormatter,
    location_error: Option<GeoError>,
}

impl MapSession {
    /// Session with an empty board. `timeout` bounds each `locate`.
    pub fn new(settings: MapSettings, timeout: Option<Duration>) -> Self {
        Self {
            board: MarkerBoard::new(settings),
            provider: Arc::new(ManualLocationProvider::new()),
            timeout,
            formatter: NumberFormatter::default(),
            location_error: None,
        }
    }

    /// Use `formatter` for distances.
    pub fn with_formatter(mut self, formatter: NumberFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The board being driven.
    pub fn board(&self) -> &MarkerBoard {
        &self.board
    }

    /// The location source behind `locate`.
    pub fn provider(&self) -> &Arc<ManualLocationProvider> {
        &self.provider
    }

    /// Failure of the last `locate`, cleared by a later successful one.
    pub fn location_error(&self) -> Option<&GeoError> {
        self.location_error.as_ref()
    }

    /// Runs one command line.
    pub async fn execute(&mut self, line: &str) -> Reply {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();
        let arg = |i: usize| args.get(i).copied().unwrap_or("");
        debug!(command, "map command");

        let result = match command {
            "" => return Reply::Silent,
            "preview" => self.preview(arg(0), arg(1)),
            "add" => self.add(arg(0), arg(1)),
            "remove" => self.remove(arg(0)),
            "clear" => self.clear(),
            "locate" => {
                let outcome = self.locate_typed(arg(0), arg(1), arg(2)).await;
                match &outcome {
                    Ok(_) => self.location_error = None,
                    Err(e) if e.is_location_error() => self.location_error = Some(e.clone()),
                    Err(_) => {}
                }
                outcome
            }
            "permission" => Ok(self.permission(arg(0))),
            "nearest" => Ok(self.nearest(arg(0))),
            "list" => Ok(Reply::Output(markers_text(&self.board))),
            "camera" => Ok(Reply::Output(camera_text(&self.board.camera()))),
            "help" => Ok(Reply::Output(HELP.to_string())),
            "quit" | "exit" => Ok(Reply::Quit),
            other => Ok(Reply::Error(format!("Perintah tidak dikenal: {other}"))),
        };

        result.unwrap_or_else(|e| Reply::Error(e.to_string()))
    }

    fn preview(&mut self, lat: &str, lng: &str) -> luas_geo::Result<Reply> {
        let camera = self.board.preview(lat, lng)?;
        Ok(Reply::Info(format!(
            "Preview lokasi {} - gunakan 'add' untuk menambahkan marker",
            camera.target
        )))
    }

    fn add(&mut self, lat: &str, lng: &str) -> luas_geo::Result<Reply> {
        let title = self.board.add_marker(lat, lng)?.title.clone();
        metrics().increment(names::MARKERS_ADDED);
        self.record_pins();
        Ok(Reply::Success(format!("{title} ditambahkan")))
    }

    fn remove(&mut self, id: &str) -> luas_geo::Result<Reply> {
        let Ok(id) = id.trim_start_matches('#').parse::<u32>() else {
            return Ok(Reply::Error(format!("Id marker tidak valid: {id}")));
        };
        let marker = self.board.remove_marker(id)?;
        self.record_pins();
        Ok(Reply::Success(format!("{} dihapus", marker.title)))
    }

    fn clear(&mut self) -> luas_geo::Result<Reply> {
        self.board.clear_all()?;
        self.record_pins();
        Ok(Reply::Success("Semua marker dihapus".to_string()))
    }

    async fn locate_typed(&mut self, lat: &str, lng: &str, accuracy: &str) -> luas_geo::Result<Reply> {
        let mut fix = LocationFix::new(Coordinate::parse(lat, lng)?);
        if let Ok(meters) = accuracy.parse::<f32>() {
            fix = fix.with_accuracy(meters);
        }

        let started = Instant::now();
        self.locate(fix).await?;
        let summary = fix.summary();
        Ok(Reply::Success(format!("{summary} ({})", format_duration(started.elapsed()))))
    }

    /// Feeds `fix` to the provider, waits for the one-shot request to
    /// resolve and places the current-location marker.
    pub async fn locate(&mut self, fix: LocationFix) -> luas_geo::Result<Marker> {
        let timer = Timer::start(names::LOCATION_WAIT_MS);
        let provider: Arc<dyn LocationProvider> = self.provider.clone();
        let request = match self.timeout {
            Some(timeout) => tokio::spawn(request_current_location_within(provider, timeout)),
            None => tokio::spawn(request_current_location(provider)),
        };

        while self.provider.listener_count() == 0 && !request.is_finished() {
            tokio::task::yield_now().await;
        }
        self.provider.push(fix);

        let received = request.await.map_err(|_| GeoError::LocationUnavailable)??;
        timer.stop();
        metrics().increment(names::LOCATION_FIXES);
        info!(coordinate = %received.coordinate, "current location set");

        let marker = self.board.set_current_location(&received).clone();
        self.record_pins();
        Ok(marker)
    }

    fn permission(&mut self, mode: &str) -> Reply {
        match mode {
            "grant" => {
                self.provider.set_permitted(true);
                Reply::Info("Permission lokasi diberikan".to_string())
            }
            "deny" => {
                self.provider.set_permitted(false);
                Reply::Info("Permission lokasi belum diberikan".to_string())
            }
            other => Reply::Error(format!("Gunakan 'permission grant' atau 'permission deny', bukan '{other}'")),
        }
    }

    fn nearest(&self, count: &str) -> Reply {
        let limit = if count.is_empty() {
            DEFAULT_NEAREST
        } else {
            match count.parse::<usize>() {
                Ok(n) => n,
                Err(_) => return Reply::Error(format!("Jumlah tidak valid: {count}")),
            }
        };
        Reply::Output(nearest_text(&self.board.nearest_markers(limit), &self.formatter))
    }

    fn record_pins(&self) {
        metrics().gauge(names::MARKERS_ON_MAP, self.board.len() as u64);
    }
}
