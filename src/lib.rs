//! Conversion between NZGD2000 latitude/longitude and New Zealand Transverse
//! Mercator (NZTM2000) easting/northing, using Redfearn's series.

pub mod coords;
pub mod error;
pub mod nztm;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use coords::{GeodesicCoords, TransverseMercatorCoords};
pub use error::ProjError;
pub use nztm::{
    convert_geodesic_to_projected, convert_projected_to_geodesic, geodesic_to_projected,
    projected_to_geodesic,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _nztm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
