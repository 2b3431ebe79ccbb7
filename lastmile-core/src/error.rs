//! Validation failures raised at component boundaries.

use thiserror::Error;

/// Errors returned when a numeric input or record violates its contract.
///
/// Every component validates at the call that receives the data, so a
/// negative distance or a non-finite load never reaches the pricing rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value was `NaN` or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// The value was below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// The value was zero or below where a strictly positive value is needed.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// A discount rate fell outside `[0, 1)`.
    #[error("{field} must lie in [0, 1), got {value}")]
    RateOutOfRange {
        /// Name of the offending rate.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// The load-efficiency band was inverted or negative.
    #[error("load band [{min}, {max}] is invalid")]
    InvalidLoadBand {
        /// Lower bound of the band.
        min: f64,
        /// Upper bound of the band.
        max: f64,
    },
    /// A required identifier was blank.
    #[error("{field} must not be empty")]
    EmptyIdentifier {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A route candidate had no stops.
    #[error("route candidate must contain at least one stop")]
    EmptyRoute,
    /// A zone catalogue listed the same identifier twice.
    #[error("zone {id} is listed more than once")]
    DuplicateZone {
        /// The repeated zone identifier.
        id: String,
    },
}

/// Reject `NaN`, infinities and negative values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Reject `NaN`, infinities, zero and negative values.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(value)
}

/// Reject blank identifiers.
pub(crate) fn ensure_identifier(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_values_are_rejected(#[case] value: f64) {
        let err = ensure_non_negative("distance_km", value).expect_err("non-finite");
        assert!(matches!(err, ValidationError::NonFinite { field: "distance_km", .. }));
    }

    #[rstest]
    fn zero_is_non_negative_but_not_positive() {
        assert_eq!(ensure_non_negative("load_kg", 0.0), Ok(0.0));
        assert!(matches!(
            ensure_positive("max_load_kg", 0.0),
            Err(ValidationError::NonPositive { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_identifiers_are_rejected(#[case] value: &str) {
        assert_eq!(
            ensure_identifier("order_id", value),
            Err(ValidationError::EmptyIdentifier { field: "order_id" })
        );
    }
}
