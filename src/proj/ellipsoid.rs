use crate::error::ProjError;

/// Reference ellipsoid parameters, derived from semi-major axis and inverse flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    a: f64,
    /// Inverse flattening; 0 for a sphere
    rf: f64,
    /// Flattening: 1/rf, or 0 when rf is 0
    f: f64,
    /// First eccentricity squared: 2f - f^2
    e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    ep2: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid without validating the inputs.
    pub const fn new(a: f64, rf: f64) -> Self {
        let f = if rf != 0.0 { 1.0 / rf } else { 0.0 };
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        Self { a, rf, f, e2, ep2 }
    }

    /// Build an ellipsoid, rejecting a non-positive semi-major axis or a
    /// negative inverse flattening.
    pub fn try_new(a: f64, rf: f64) -> Result<Self, ProjError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "semi-major axis must be finite and positive, got {a}"
            )));
        }
        if !rf.is_finite() || rf < 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "inverse flattening must be finite and non-negative, got {rf}"
            )));
        }
        Ok(Self::new(a, rf))
    }

    pub const fn a(&self) -> f64 {
        self.a
    }

    pub const fn rf(&self) -> f64 {
        self.rf
    }

    pub const fn f(&self) -> f64 {
        self.f
    }

    pub const fn e2(&self) -> f64 {
        self.e2
    }

    pub const fn ep2(&self) -> f64 {
        self.ep2
    }

    /// Third flattening: f / (2 - f)
    pub fn n(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }
}

/// GRS80, the ellipsoid of NZGD2000.
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grs80_constants() {
        assert_relative_eq!(GRS80.a(), 6_378_137.0);
        assert_relative_eq!(GRS80.f(), 1.0 / 298.257_222_101);
        assert_relative_eq!(GRS80.e2(), 0.006_694_380_022_900_787, epsilon = 1e-15);
        assert_relative_eq!(GRS80.ep2(), 0.006_739_496_775_478_957, epsilon = 1e-15);
        assert_relative_eq!(GRS80.n(), 0.001_679_220_394_628_745, epsilon = 1e-15);
    }

    #[test]
    fn test_derived_relations() {
        let f = GRS80.f();
        assert_eq!(GRS80.e2(), 2.0 * f - f * f);
        assert_eq!(GRS80.ep2(), GRS80.e2() / (1.0 - GRS80.e2()));
    }

    #[test]
    fn test_zero_inverse_flattening_is_sphere() {
        let sphere = Ellipsoid::new(6_371_000.0, 0.0);
        assert!(sphere.is_sphere());
        assert_eq!(sphere.f(), 0.0);
        assert_eq!(sphere.e2(), 0.0);
        assert_eq!(sphere.ep2(), 0.0);
        assert_eq!(sphere.n(), 0.0);
    }

    #[test]
    fn test_try_new_rejects_bad_axis() {
        assert!(Ellipsoid::try_new(0.0, 298.0).is_err());
        assert!(Ellipsoid::try_new(-1.0, 298.0).is_err());
        assert!(Ellipsoid::try_new(f64::NAN, 298.0).is_err());
        assert!(Ellipsoid::try_new(6_378_137.0, -1.0).is_err());
        assert!(Ellipsoid::try_new(6_378_137.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_try_new_accepts_sphere() {
        let e = Ellipsoid::try_new(6_371_000.0, 0.0).unwrap();
        assert!(e.is_sphere());
        assert_eq!(Ellipsoid::try_new(6_378_137.0, 298.257_222_101).unwrap(), GRS80);
    }
}
