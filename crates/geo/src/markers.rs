//! Marker board behind the map screen.
//!
//! Holds the camera, the user's markers and the single current-location
//! marker. Marker titles count up from `Marker #1`; clearing the board
//! starts the count again.

use crate::error::{GeoError, Result};
use crate::haversine::haversine_distance;
use crate::location::LocationFix;
use crate::Coordinate;
use serde::Serialize;
use tracing::{debug, info};

/// Title of the marker placed at the device location.
pub const CURRENT_LOCATION_TITLE: &str = "My Location";

/// Id reserved for the current-location marker.
pub const CURRENT_LOCATION_ID: u32 = 0;

/// Camera defaults and zoom levels for each kind of move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Where the camera starts
    pub default_center: Coordinate,
    /// Zoom at start
    pub default_zoom: f32,
    /// Zoom when previewing a typed coordinate
    pub search_zoom: f32,
    /// Zoom after adding a marker
    pub marker_zoom: f32,
    /// Zoom after a location fix
    pub location_zoom: f32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new(-7.2930192, 112.8079525),
            default_zoom: 12.0,
            search_zoom: 15.0,
            marker_zoom: 15.0,
            location_zoom: 16.0,
        }
    }
}

/// Where the camera looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPosition {
    /// Center of the view
    pub target: Coordinate,
    /// Map zoom level
    pub zoom: f32,
}

/// A pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Board-assigned id; 0 is the device location
    pub id: u32,
    /// Label such as `Marker #3`
    pub title: String,
    /// Secondary text with the coordinates
    pub snippet: String,
    /// Where the pin stands
    pub position: Coordinate,
}

impl Marker {
    fn new(id: u32, title: String, position: Coordinate) -> Self {
        Self {
            id,
            title,
            snippet: format!("Lat: {}, Lng: {}", position.latitude, position.longitude),
            position,
        }
    }

    /// True for the device-location marker.
    pub fn is_current_location(&self) -> bool {
        self.id == CURRENT_LOCATION_ID
    }
}

/// A marker and its distance from a reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDistance<'a> {
    pub marker: &'a Marker,
    pub distance_km: f64,
}

/// State of the map screen.
#[derive(Debug, Clone)]
pub struct MarkerBoard {
    settings: MapSettings,
    camera: CameraPosition,
    markers: Vec<Marker>,
    current_location: Option<Marker>,
    next_id: u32,
}

impl Default for MarkerBoard {
    fn default() -> Self {
        Self::new(MapSettings::default())
    }
}

impl MarkerBoard {
    /// Empty board with the camera at the default center.
    pub fn new(settings: MapSettings) -> Self {
        Self {
            camera: CameraPosition {
                target: settings.default_center,
                zoom: settings.default_zoom,
            },
            settings,
            markers: Vec::new(),
            current_location: None,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn camera(&self) -> CameraPosition {
        self.camera
    }

    /// User markers in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn current_location(&self) -> Option<&Marker> {
        self.current_location.as_ref()
    }

    /// Marker with `id`, including the current-location marker.
    pub fn get(&self, id: u32) -> Option<&Marker> {
        self.current_location
            .iter()
            .chain(&self.markers)
            .find(|m| m.id == id)
    }

    /// Number of pins on the map, the current-location marker included.
    pub fn len(&self) -> usize {
        self.markers.len() + usize::from(self.current_location.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the camera to a typed coordinate without adding a marker.
    pub fn preview(&mut self, latitude: &str, longitude: &str) -> Result<CameraPosition> {
        let target = Coordinate::parse(latitude, longitude)?;
        self.move_camera(target, self.settings.search_zoom);
        Ok(self.camera)
    }

    /// Adds a marker at a typed coordinate.
    pub fn add_marker(&mut self, latitude: &str, longitude: &str) -> Result<&Marker> {
        let position = Coordinate::parse(latitude, longitude)?;
        self.add_marker_at(position)
    }

    /// Adds a marker at `position` and moves the camera onto it.
    pub fn add_marker_at(&mut self, position: Coordinate) -> Result<&Marker> {
        let position = Coordinate::checked(position.latitude, position.longitude)?;
        let id = self.next_id;
        self.next_id += 1;

        let index = self.markers.len();
        self.markers.push(Marker::new(id, format!("Marker #{id}"), position));
        self.move_camera(position, self.settings.marker_zoom);

        info!(id, %position, "marker added");
        Ok(&self.markers[index])
    }

    /// Removes one user marker. The current-location marker is not removable
    /// on its own.
    pub fn remove_marker(&mut self, id: u32) -> Result<Marker> {
        let index = self
            .markers
            .iter()
            .position(|m| m.id == id)
            .ok_or(GeoError::MarkerNotFound(id))?;

        let marker = self.markers.remove(index);
        info!(id, "marker removed");
        Ok(marker)
    }

    /// Removes every pin and restarts the numbering. Returns how many pins
    /// were removed.
    pub fn clear_all(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(GeoError::NoMarkers);
        }

        let removed = self.len();
        self.markers.clear();
        self.current_location = None;
        self.next_id = 1;

        info!(removed, "all markers cleared");
        Ok(removed)
    }

    /// Places the current-location marker at `fix`, replacing any earlier
    /// one, and zooms in on it.
    pub fn set_current_location(&mut self, fix: &LocationFix) -> &Marker {
        let position = fix.coordinate;
        self.move_camera(position, self.settings.location_zoom);
        debug!(%position, accuracy = ?fix.accuracy_m, "current location updated");

        self.current_location.insert(Marker::new(
            CURRENT_LOCATION_ID,
            CURRENT_LOCATION_TITLE.to_string(),
            position,
        ))
    }

    /// Up to `limit` user markers, closest first.
    ///
    /// Distances are measured from the current location, or from the camera
    /// target before any fix has arrived.
    pub fn nearest_markers(&self, limit: usize) -> Vec<MarkerDistance<'_>> {
        let origin = self
            .current_location
            .as_ref()
            .map_or(self.camera.target, |m| m.position);

        let mut ranked: Vec<_> = self
            .markers
            .iter()
            .map(|marker| MarkerDistance {
                marker,
                distance_km: haversine_distance(&origin, &marker.position),
            })
            .collect();

        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranked.truncate(limit);
        ranked
    }

    fn move_camera(&mut self, target: Coordinate, zoom: f32) {
        self.camera = CameraPosition { target, zoom };
    }
}
