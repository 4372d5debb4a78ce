//! Haversine distance calculation.
//!
//! Great-circle distance between two points on a sphere, used to rank
//! markers by how far they are from the device.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use luas_geo::{haversine_distance, Coordinate};
///
/// let jakarta = Coordinate::new(-6.2088, 106.8456);
/// let bandung = Coordinate::new(-6.9175, 107.6191);
///
/// let distance = haversine_distance(&jakarta, &bandung);
/// assert!((distance - 116.0).abs() < 3.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
