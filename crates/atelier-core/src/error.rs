use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtelierError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AtelierError {
    /// Build an `InvalidArgument` naming the field and the rejected value.
    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidArgument(format!("{field} = {value} is outside [{min}, {max}]"))
    }
}

pub type Result<T> = std::result::Result<T, AtelierError>;

/// Fail with `InvalidArgument` unless `value` lies in `[min, max]`.
///
/// NaN is rejected.
pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AtelierError::out_of_range(field, value, min, max))
    }
}

/// Fail with `InvalidArgument` unless `value` is finite and strictly positive.
pub fn check_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AtelierError::InvalidArgument(format!(
            "{field} must be a positive finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_bounds_inclusive() {
        assert!(check_range("x", -5.0, -5.0, 5.0).is_ok());
        assert!(check_range("x", 5.0, -5.0, 5.0).is_ok());
        assert!(check_range("x", 5.01, -5.0, 5.0).is_err());
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(matches!(
            check_range("x", f64::NAN, -5.0, 5.0),
            Err(AtelierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive("ray_length", 2.0).unwrap(), 2.0);
        assert!(check_positive("ray_length", 0.0).is_err());
        assert!(check_positive("ray_length", -1.0).is_err());
        assert!(check_positive("ray_length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = AtelierError::out_of_range("incident_angle_z", 91.0, -90.0, 90.0);
        assert_eq!(
            err.to_string(),
            "Invalid argument: incident_angle_z = 91 is outside [-90, 90]"
        );
    }
}
