//! Transverse Mercator projection — Redfearn's series.
//!
//! Implements the formulation given in the GDA technical manual, the one LINZ
//! uses to define NZTM2000. Series are carried to the 8th power of the
//! easting term, which keeps the round trip below a millimetre across a
//! zone as wide as New Zealand's.

use crate::error::ProjError;
use crate::proj::common::{foot_point_latitude, meridian_arc, normalize_longitude};
use crate::proj::config::TransverseMercatorConfig;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projection;

/// Transverse Mercator projection parameters, with the meridional arc at the
/// origin latitude precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
    lat0: f64,
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    unit_to_metre: f64,
    m0: f64, // Meridional arc at lat0
}

impl TransverseMercator {
    /// Build a projection from radians. No validation is performed.
    pub fn new(
        ellipsoid: Ellipsoid,
        lon0: f64,
        lat0: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
        unit_to_metre: f64,
    ) -> Self {
        let m0 = meridian_arc(&ellipsoid, lat0);
        tracing::debug!(
            a = ellipsoid.a(),
            rf = ellipsoid.rf(),
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
            unit_to_metre,
            m0,
            "transverse mercator projection built"
        );
        Self {
            ellipsoid,
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
            unit_to_metre,
            m0,
        }
    }

    /// Build a projection from a degree-based configuration, rejecting
    /// parameters that cannot describe a projection.
    pub fn from_config(config: &TransverseMercatorConfig) -> Result<Self, ProjError> {
        let ellipsoid = Ellipsoid::try_new(config.semi_major_axis, config.inverse_flattening)?;

        if !config.scale_factor.is_finite() || config.scale_factor <= 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "scale factor must be finite and positive, got {}",
                config.scale_factor
            )));
        }
        if !config.unit_to_metre.is_finite() || config.unit_to_metre <= 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "unit to metre conversion must be finite and positive, got {}",
                config.unit_to_metre
            )));
        }
        for (name, value) in [
            ("central meridian", config.central_meridian),
            ("origin latitude", config.origin_latitude),
            ("false easting", config.false_easting),
            ("false northing", config.false_northing),
        ] {
            if !value.is_finite() {
                return Err(ProjError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(Self::new(
            ellipsoid,
            config.central_meridian.to_radians(),
            config.origin_latitude.to_radians(),
            config.scale_factor,
            config.false_easting,
            config.false_northing,
            config.unit_to_metre,
        ))
    }

    pub fn central_meridian(&self) -> f64 {
        self.lon0
    }

    pub fn origin_latitude(&self) -> f64 {
        self.lat0
    }

    pub fn scale_factor(&self) -> f64 {
        self.k0
    }

    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    pub fn unit_to_metre(&self) -> f64 {
        self.unit_to_metre
    }

    /// Meridional arc from the equator to the origin latitude (metres).
    pub fn meridian_arc_at_origin(&self) -> f64 {
        self.m0
    }

    /// Radii of curvature at φ: (ν prime vertical, ρ meridian).
    fn radii(&self, sin_phi: f64) -> (f64, f64) {
        let e2 = self.ellipsoid.e2();
        let eslt = 1.0 - e2 * sin_phi * sin_phi;
        let nu = self.ellipsoid.a() / eslt.sqrt();
        let rho = nu * (1.0 - e2) / eslt;
        (nu, rho)
    }

    /// Projected (easting, northing) -> geodetic (lat_rad, lon_rad).
    ///
    /// Singular where the foot-point latitude reaches ±90°; the resulting
    /// non-finite values are returned as-is.
    pub fn to_geodetic(&self, easting: f64, northing: f64) -> (f64, f64) {
        let k0 = self.k0;
        let utom = self.unit_to_metre;

        let arc = (northing - self.false_northing) * utom / k0 + self.m0;
        let fphi = foot_point_latitude(&self.ellipsoid, arc);
        let slt = fphi.sin();
        let clt = fphi.cos();

        let (nu, rho) = self.radii(slt);
        let psi = nu / rho;

        let e = (easting - self.false_easting) * utom;
        let x = e / (nu * k0);
        let x2 = x * x;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;

        let trm1 = 1.0 / 2.0;
        let trm2 = ((-4.0 * psi + 9.0 * (1.0 - t2)) * psi + 12.0 * t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 12.0 * (21.0 - 71.0 * t2)) * psi
            + 15.0 * ((15.0 * t2 - 98.0) * t2 + 15.0))
            * psi
            + 180.0 * ((-3.0 * t2 + 5.0) * t2))
            * psi
            + 360.0 * t4)
            / 720.0;
        let trm4 = (((1575.0 * t2 + 4095.0) * t2 + 3633.0) * t2 + 1385.0) / 40320.0;

        let lat = fphi + (t * x * e / (k0 * rho)) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        let trm1 = 1.0;
        let trm2 = (psi + 2.0 * t2) / 6.0;
        let trm3 = (((-4.0 * (1.0 - 6.0 * t2) * psi + (9.0 - 68.0 * t2)) * psi + 72.0 * t2) * psi
            + 24.0 * t4)
            / 120.0;
        let trm4 = (((720.0 * t2 + 1320.0) * t2 + 662.0) * t2 + 61.0) / 5040.0;

        let lon = self.lon0 - (x / clt) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        (lat, lon)
    }

    /// Geodetic (lat_rad, lon_rad) -> projected (easting, northing).
    pub fn to_projected(&self, lat: f64, lon: f64) -> (f64, f64) {
        let k0 = self.k0;
        let utom = self.unit_to_metre;

        let dlon = normalize_longitude(lon - self.lon0);
        let m = meridian_arc(&self.ellipsoid, lat);

        let slt = lat.sin();
        let (nu, rho) = self.radii(slt);
        let psi = nu / rho;

        let clt = lat.cos();
        let wc = clt * dlon;
        let wc2 = wc * wc;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t2 * t4;

        let trm1 = (psi - t2) / 6.0;
        let trm2 =
            (((4.0 * (1.0 - 6.0 * t2) * psi + (1.0 + 8.0 * t2)) * psi - 2.0 * t2) * psi + t4) / 120.0;
        let trm3 = (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;

        let gce = (k0 * nu * dlon * clt) * (((trm3 * wc2 + trm2) * wc2 + trm1) * wc2 + 1.0);
        let easting = gce / utom + self.false_easting;

        let trm1 = 1.0 / 2.0;
        let trm2 = ((4.0 * psi + 1.0) * psi - t2) / 24.0;
        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 28.0 * (1.0 - 6.0 * t2)) * psi
            + (1.0 - 32.0 * t2))
            * psi
            - 2.0 * t2)
            * psi
            + t4)
            / 720.0;
        let trm4 = (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;

        let gcn = (nu * t) * ((((trm4 * wc2 + trm3) * wc2 + trm2) * wc2 + trm1) * wc2);
        let northing = (gcn + m - self.m0) * k0 / utom + self.false_northing;

        (easting, northing)
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        Ok(self.to_projected(lat, lon))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lat, lon) = self.to_geodetic(x, y);
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
