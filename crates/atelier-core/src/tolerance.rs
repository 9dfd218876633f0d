/// Tolerances used when comparing computed geometry and coordinates.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for lengths and vector components
    pub linear: f64,
    /// Tolerance for latitude/longitude comparisons (in degrees)
    pub coordinate: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_COORDINATE: f64 = 1e-7;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            coordinate: Self::DEFAULT_COORDINATE,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if two (lat, lon) pairs denote the same place
    pub fn same_coordinates(self, a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < self.coordinate && (a.1 - b.1).abs() < self.coordinate
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::default();
        assert!(tol.linear_eq(1.0, 1.0 + 1e-12));
        assert!(!tol.linear_eq(1.0, 1.001));
    }

    #[test]
    fn test_is_zero() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(1e-12));
        assert!(tol.is_zero(-1e-12));
        assert!(!tol.is_zero(1e-6));
    }

    #[test]
    fn test_same_coordinates() {
        let tol = Tolerance::default();
        assert!(tol.same_coordinates((45.5017, -73.5673), (45.5017, -73.5673)));
        assert!(!tol.same_coordinates((45.5017, -73.5673), (45.5018, -73.5673)));
    }
}
