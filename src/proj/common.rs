//! Common helpers for Redfearn's Transverse Mercator: meridional arc,
//! foot-point latitude and longitude normalisation.

use std::f64::consts::{PI, TAU};

use super::ellipsoid::Ellipsoid;

/// Compute the meridional arc length from the equator to latitude phi (Helmert's formula).
///
/// Series in e², e⁴, e⁶ as given in the GDA technical manual. The truncation is
/// part of the NZTM definition, so results match the published LINZ routines.
pub fn meridian_arc(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let e2 = ellipsoid.e2();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    let a0 = 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0);
    let a2 = (3.0 / 8.0) * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
    let a4 = (15.0 / 256.0) * (e4 + 3.0 * e6 / 4.0);
    let a6 = 35.0 * e6 / 3072.0;

    ellipsoid.a()
        * (a0 * phi - a2 * (2.0 * phi).sin() + a4 * (4.0 * phi).sin() - a6 * (6.0 * phi).sin())
}

/// Latitude whose meridional arc is `arc`, via a single-pass series in the
/// third flattening n (no iteration).
pub fn foot_point_latitude(ellipsoid: &Ellipsoid, arc: f64) -> f64 {
    let f = ellipsoid.f();
    let n = f / (2.0 - f);
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;

    // Rectifying radius scaled by (1 - n)(1 - n²)
    let g = ellipsoid.a() * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
    let sigma = arc / g;

    sigma
        + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sigma).sin()
        + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sigma).sin()
        + (151.0 * n3 / 96.0) * (6.0 * sigma).sin()
        + (1097.0 * n4 / 512.0) * (8.0 * sigma).sin()
}

/// Bring a longitude difference into [-π, π].
///
/// Values within a few turns are wrapped by repeated ±2π so that the common
/// case is bit-identical to a plain wraparound. Anything further out is first
/// reduced modulo 2π, which keeps the loops bounded; ±∞ becomes NaN.
pub fn normalize_longitude(dlon: f64) -> f64 {
    let mut dlon = if dlon.abs() > 4.0 * PI { dlon % TAU } else { dlon };
    while dlon > PI {
        dlon -= TAU;
    }
    while dlon < -PI {
        dlon += TAU;
    }
    dlon
}
