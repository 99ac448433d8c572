//! Memory Validation
//!
//! Pure validation of the raw memory-size field against the numeric
//! envelope: parseable, within range, a multiple of the granularity, and
//! a power of two after dividing by the granularity. Checks run in that
//! order and short-circuit, so exactly one error surfaces at a time.

use snafu::Snafu;

use crate::config::MemoryLimits;
use crate::helpers::{format_number, is_power_of_two, strip_grouping};

/// Advisory errors for the memory field.
///
/// The display strings are the exact user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum MemoryError {
    /// Field contains non-numeric content after normalization
    #[snafu(display("Invalid input. Please enter a valid number"))]
    InvalidNumber,

    /// Value outside the inclusive `[min, max]` envelope
    #[snafu(display("Value must be between {} and {}", format_number(*min), format_number(*max)))]
    OutOfRange { min: i64, max: i64 },

    /// Value not an exact multiple of the granularity
    #[snafu(display("Value must be a multiple of {multiple}"))]
    NotMultiple { multiple: i64 },

    /// Value divided by the granularity is not a power of two
    #[snafu(display("Value / {multiple} must be a power of 2"))]
    NotPowerOfTwo { multiple: i64 },
}

/// Outcome of validating one raw memory input.
///
/// `value` and `error` are independent: a range or granularity failure
/// still reports the parsed value so the draft can keep the user's last
/// entry. An empty field is unset (`None`, `None`), not erroneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryCheck {
    /// Parsed value in MB, when the input was numeric
    pub value: Option<i64>,
    /// First failed check, if any
    pub error: Option<MemoryError>,
}

/// Validate a raw memory-size string against the configured limits.
///
/// Normalization trims surrounding whitespace and strips `,` grouping
/// separators, so `" 8,388,608 "` parses the same as `"8388608"`.
pub fn validate_memory(raw: &str, limits: &MemoryLimits) -> MemoryCheck {
    let normalized = strip_grouping(raw.trim());

    if normalized.is_empty() {
        return MemoryCheck::default();
    }

    let Ok(value) = normalized.parse::<i64>() else {
        return MemoryCheck {
            value: None,
            error: Some(MemoryError::InvalidNumber),
        };
    };

    let error = if value < limits.min || value > limits.max {
        Some(MemoryError::OutOfRange {
            min: limits.min,
            max: limits.max,
        })
    } else if value % limits.multiple != 0 {
        Some(MemoryError::NotMultiple {
            multiple: limits.multiple,
        })
    } else if !is_power_of_two(value / limits.multiple) {
        Some(MemoryError::NotPowerOfTwo {
            multiple: limits.multiple,
        })
    } else {
        None
    };

    MemoryCheck {
        value: Some(value),
        error,
    }
}
