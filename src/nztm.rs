//! NZTM2000 conversions in degrees and metres.
//!
//! The projection is built once per process and shared read-only, so every
//! function here may be called from any thread.

use std::sync::LazyLock;

use crate::coords::{GeodesicCoords, TransverseMercatorCoords};
use crate::proj::config::NZTM;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::transverse_mercator::TransverseMercator;

static PROJECTION: LazyLock<TransverseMercator> = LazyLock::new(|| {
    tracing::debug!("initialising NZTM projection");
    TransverseMercator::new(
        Ellipsoid::new(NZTM.semi_major_axis, NZTM.inverse_flattening),
        NZTM.central_meridian.to_radians(),
        NZTM.origin_latitude.to_radians(),
        NZTM.scale_factor,
        NZTM.false_easting,
        NZTM.false_northing,
        NZTM.unit_to_metre,
    )
});

/// The shared NZTM projection.
pub fn projection() -> &'static TransverseMercator {
    &PROJECTION
}

/// NZTM easting/northing (metres) to latitude/longitude (degrees).
pub fn convert_projected_to_geodesic(easting: f64, northing: f64) -> GeodesicCoords {
    let (lat, lon) = projection().to_geodetic(easting, northing);
    GeodesicCoords::new(lat.to_degrees(), lon.to_degrees())
}

/// Latitude/longitude (degrees) to NZTM easting/northing (metres).
pub fn convert_geodesic_to_projected(latitude: f64, longitude: f64) -> TransverseMercatorCoords {
    let (easting, northing) =
        projection().to_projected(latitude.to_radians(), longitude.to_radians());
    TransverseMercatorCoords::new(easting, northing)
}

pub fn projected_to_geodesic(coords: TransverseMercatorCoords) -> GeodesicCoords {
    convert_projected_to_geodesic(coords.easting, coords.northing)
}

pub fn geodesic_to_projected(coords: GeodesicCoords) -> TransverseMercatorCoords {
    convert_geodesic_to_projected(coords.latitude, coords.longitude)
}
