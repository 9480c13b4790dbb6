use rust_decimal::Decimal;
use thiserror::Error;

/// Largest magnitude a `NUMERIC(10, 2)` column can hold is just under this.
const MONEY_LIMIT: i64 = 100_000_000;
const MONEY_SCALE: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },
    #[error("{field} must be one of [{}], got {value:?}", .allowed.join(", "))]
    InvalidTag {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("{field} does not fit NUMERIC(10, 2): {value}")]
    Precision { field: &'static str, value: Decimal },
    #[error("exactly one of [{}] must be set", .fields.join(", "))]
    ExactlyOne { fields: &'static [&'static str] },
    #[error("{field} cannot be changed")]
    Immutable { field: &'static str },
}

pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }
    Ok(())
}

pub fn opt_max_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

pub fn money(field: &'static str, value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > MONEY_SCALE || value.abs() >= Decimal::from(MONEY_LIMIT) {
        return Err(ValidationError::Precision {
            field,
            value: *value,
        });
    }
    Ok(())
}
