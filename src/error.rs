// src/error.rs
use thiserror::Error;

/// Error types for the bs-greeks library
#[derive(Debug, Error)]
pub enum BsError {
    /// Pricing input outside the domain of the closed-form formulas
    #[error("Domain error: parameter '{parameter}' = {value}: {constraint}")]
    Domain {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Valid inputs whose evaluation still left the representable range
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },

    /// Invalid sweep or approximation-check configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Failure while writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BsError {
    /// True for the domain-error class raised by pricing inputs
    pub fn is_domain(&self) -> bool {
        matches!(self, BsError::Domain { .. })
    }
}

/// Result type alias for bs-greeks operations
pub type BsResult<T> = Result<T, BsError>;

/// Validation utilities
pub mod validation {
    use super::{BsError, BsResult};

    /// Upper bound on grid points in a single sweep
    pub const MAX_POINTS: usize = 1_000_000;

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> BsResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(BsError::Domain {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> BsResult<()> {
        if !value.is_finite() {
            Err(BsError::Domain {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a computed result is finite
    pub fn validate_output(method: &str, value: f64) -> BsResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(BsError::NumericalInstability {
                method: method.to_string(),
                reason: format!("result {} is not finite", value),
            })
        }
    }

    /// Validate that `value` lies strictly below `bound`
    pub fn validate_below(name: &str, value: f64, bound: f64) -> BsResult<()> {
        if value >= bound {
            Err(BsError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("{} must be smaller than {}", value, bound),
            })
        } else {
            Ok(())
        }
    }

    /// Validate grid point count
    pub fn validate_points(points: usize) -> BsResult<()> {
        if points < 2 {
            Err(BsError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "must be at least 2".to_string(),
            })
        } else if points > MAX_POINTS {
            Err(BsError::InvalidConfiguration {
                field: "points".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_POINTS),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sweep range: finite endpoints with start < end
    pub fn validate_range(name: &str, start: f64, end: f64) -> BsResult<()> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            Err(BsError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("range [{}, {}] must be finite with start < end", start, end),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("r", 1.0).is_ok());
        assert!(validate_finite("r", -0.02).is_ok());
        assert!(validate_finite("r", f64::NAN).is_err());
        assert!(validate_finite("r", f64::INFINITY).is_err());
        assert!(validate_finite("r", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_points_and_range() {
        assert!(validate_points(2).is_ok());
        assert!(validate_points(1).is_err());
        assert!(validate_points(MAX_POINTS + 1).is_err());
        assert!(validate_range("s", 80.0, 120.0).is_ok());
        assert!(validate_range("s", 120.0, 80.0).is_err());
        assert!(validate_range("s", 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = BsError::Domain {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
        assert!(error.is_domain());
    }

    #[test]
    fn test_validate_output() {
        assert_eq!(validate_output("price", 11.1).unwrap(), 11.1);
        let err = validate_output("price", f64::NAN).unwrap_err();
        assert!(matches!(err, BsError::NumericalInstability { .. }));
        assert!(format!("{}", err).contains("price"));
    }

    #[test]
    fn test_configuration_error_is_not_domain() {
        let error = validate_below("dt", 1.0, 0.5).unwrap_err();
        assert!(!error.is_domain());
        assert!(format!("{}", error).contains("dt"));
    }
}
