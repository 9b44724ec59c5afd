//! Coordinate value types exchanged with callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodesicCoords {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeodesicCoords {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Project onto NZTM.
    pub fn to_projected(self) -> TransverseMercatorCoords {
        crate::nztm::geodesic_to_projected(self)
    }
}

impl fmt::Display for GeodesicCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}°, {:.9}°)", self.latitude, self.longitude)
    }
}

/// Easting and northing in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercatorCoords {
    pub easting: f64,
    pub northing: f64,
}

impl TransverseMercatorCoords {
    pub const fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    /// Unproject from NZTM.
    pub fn to_geodesic(self) -> GeodesicCoords {
        crate::nztm::projected_to_geodesic(self)
    }
}

impl fmt::Display for TransverseMercatorCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}mE {:.3}mN", self.easting, self.northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let g = GeodesicCoords::new(-41.2865, 174.7762);
        assert_eq!(g.to_string(), "(-41.286500000°, 174.776200000°)");
        let p = TransverseMercatorCoords::new(1_748_735.553_06, 5_427_916.478_72);
        assert_eq!(p.to_string(), "1748735.553mE 5427916.479mN");
    }

    #[test]
    fn test_ron_field_names() {
        let p: TransverseMercatorCoords =
            ron::from_str("(easting: 1600000.0, northing: 10000000.0)").unwrap();
        assert_eq!(p, TransverseMercatorCoords::new(1_600_000.0, 10_000_000.0));
    }
}
