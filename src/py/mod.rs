//! PyO3 bindings for the NZTM conversions.

use pyo3::prelude::*;

use crate::nztm;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(nztm_to_geodesic, m)?)?;
    m.add_function(wrap_pyfunction!(geodesic_to_nztm, m)?)?;
    Ok(())
}

/// Convert NZTM coordinates to latitude/longitude.
///
/// Args:
///     easting: NZTM easting in metres.
///     northing: NZTM northing in metres.
///
/// Returns:
///     Tuple of (latitude, longitude) in degrees.
#[pyfunction]
fn nztm_to_geodesic(easting: f64, northing: f64) -> (f64, f64) {
    let g = nztm::convert_projected_to_geodesic(easting, northing);
    (g.latitude, g.longitude)
}

/// Convert latitude/longitude to NZTM coordinates.
///
/// Args:
///     latitude: Latitude in degrees.
///     longitude: Longitude in degrees.
///
/// Returns:
///     Tuple of (easting, northing) in metres.
#[pyfunction]
fn geodesic_to_nztm(latitude: f64, longitude: f64) -> (f64, f64) {
    let p = nztm::convert_geodesic_to_projected(latitude, longitude);
    (p.easting, p.northing)
}
