//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("more than one primary child: index {first} and index {second}")]
    DuplicatePrimary { first: usize, second: usize },

    #[error("invalid {field} for {subject}: {value}")]
    InvalidDimension {
        subject: String,
        field: &'static str,
        value: f32,
    },

    #[error("child '{0}' has neither a size nor text to measure")]
    MissingMeasure(String),

    #[error("scene parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Accept a finite, non-negative length.
pub fn check_dimension(subject: &str, field: &'static str, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension {
            subject: subject.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimension() {
        assert_eq!(check_dimension("scene", "width", 0.0).unwrap(), 0.0);
        assert_eq!(check_dimension("scene", "width", 390.0).unwrap(), 390.0);

        for bad in [-1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = check_dimension("scene", "width", bad).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidDimension { field: "width", .. }));
        }
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = check_dimension("child 'a'", "height", -2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid height for child 'a': -2");
    }
}
