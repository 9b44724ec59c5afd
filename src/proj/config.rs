//! Serializable Transverse Mercator parameters, in degrees.

use serde::{Deserialize, Serialize};

/// Construction inputs for a [`TransverseMercator`](super::transverse_mercator::TransverseMercator).
///
/// Angles are in degrees here; they are converted to radians when the
/// projection is built.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercatorConfig {
    /// Ellipsoid semi-major axis (metres)
    pub semi_major_axis: f64,
    /// Ellipsoid inverse flattening, 0 for a sphere
    pub inverse_flattening: f64,
    /// Central meridian (degrees)
    pub central_meridian: f64,
    /// Latitude of origin (degrees)
    pub origin_latitude: f64,
    pub scale_factor: f64,
    /// False easting, in projection units
    pub false_easting: f64,
    /// False northing, in projection units
    pub false_northing: f64,
    /// Metres per projection unit
    #[serde(default = "default_unit_to_metre")]
    pub unit_to_metre: f64,
}

fn default_unit_to_metre() -> f64 {
    1.0
}

/// New Zealand Transverse Mercator 2000 (EPSG:2193) on GRS80.
pub const NZTM: TransverseMercatorConfig = TransverseMercatorConfig {
    semi_major_axis: 6_378_137.0,
    inverse_flattening: 298.257_222_101,
    central_meridian: 173.0,
    origin_latitude: 0.0,
    scale_factor: 0.9996,
    false_easting: 1_600_000.0,
    false_northing: 10_000_000.0,
    unit_to_metre: 1.0,
};
