use crate::error::{MatchError, Result};
use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two validated points in kilometers
pub fn distance_km(from: &GeoPoint, to: &GeoPoint) -> Result<f64> {
    validate_point(from)?;
    validate_point(to)?;
    Ok(haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude))
}

fn validate_point(point: &GeoPoint) -> Result<()> {
    let lat_ok = point.latitude.is_finite() && (-90.0..=90.0).contains(&point.latitude);
    let lon_ok = point.longitude.is_finite() && (-180.0..=180.0).contains(&point.longitude);
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(MatchError::InvalidCoordinates {
            lat: point.latitude,
            lon: point.longitude,
        })
    }
}
