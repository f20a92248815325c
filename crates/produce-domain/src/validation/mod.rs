//! Produce record validation and canonicalization.
//!
//! Validates that a record is well-formed before it reaches the store:
//! - Produce code is four groups of four alphanumerics joined by hyphens
//! - Name is alphanumeric words separated by single or repeated spaces
//! - Unit price is a decimal with at most two fractional digits
//!
//! Canonicalization runs only on records that passed validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::Produce;

#[cfg(test)]
mod validation_proptest;

/// Currency marker accepted as the first character of a unit price.
pub const CURRENCY_MARKER: char = '$';

static PRODUCE_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]]{4}-[[:alnum:]]{4}-[[:alnum:]]{4}-[[:alnum:]]{4}$")
        .expect("produce code pattern is valid")
});

// One or more characters; the older three-character minimum no longer applies.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]](?:[[:alnum:] ]*[[:alnum:]])?$").expect("name pattern is valid")
});

static UNIT_PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?[[:digit:]]*\.[[:digit:]]{0,2}$").expect("unit price pattern is valid")
});

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Produce code does not match `XXXX-XXXX-XXXX-XXXX`
    #[error("invalid produce code ({value})")]
    InvalidCode { value: String },
    /// Name is empty, padded with spaces, or contains punctuation
    #[error("invalid produce name ({value})")]
    InvalidName { value: String },
    /// Unit price is not a decimal with up to two fractional digits
    #[error("invalid produce unit price ({value})")]
    InvalidUnitPrice { value: String },
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Returns true if `code` is exactly four hyphen-joined groups of four
/// ASCII alphanumerics.
pub fn validate_code(code: &str) -> bool {
    PRODUCE_CODE_PATTERN.is_match(code)
}

/// Returns true if `name` starts and ends with an alphanumeric character and
/// contains only alphanumerics and spaces in between.
pub fn validate_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Returns true if `price` is an optional `$`, any number of digits, a
/// decimal point, and zero to two digits.
///
/// `"."` is accepted and canonicalizes to `"0.00"`.
pub fn validate_price(price: &str) -> bool {
    UNIT_PRICE_PATTERN.is_match(price)
}

/// Validate every field of a record.
///
/// Errors are collected rather than short-circuited and always appear in
/// field order: code, name, unit price.
pub fn validate_record(produce: &Produce) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if !validate_code(&produce.code) {
        errors.push(ValidationError::InvalidCode {
            value: produce.code.clone(),
        });
    }
    if !validate_name(&produce.name) {
        errors.push(ValidationError::InvalidName {
            value: produce.name.clone(),
        });
    }
    if !validate_price(&produce.unit_price) {
        errors.push(ValidationError::InvalidUnitPrice {
            value: produce.unit_price.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Renders validation errors as the messages reported back to clients.
pub fn validation_messages(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Brings a validated unit price into `digits.dd` form.
///
/// Strips a leading `$`, adds a leading zero before a bare decimal point and
/// pads the fractional part to two digits. A value without a decimal point
/// only has the currency marker removed.
pub fn canonicalize_price(price: &str) -> String {
    let price = price.strip_prefix(CURRENCY_MARKER).unwrap_or(price);

    let Some((whole, fraction)) = price.split_once('.') else {
        return price.to_string();
    };

    let whole = if whole.is_empty() { "0" } else { whole };
    let padding = "00".get(fraction.len().min(2)..).unwrap_or_default();

    format!("{whole}.{fraction}{padding}")
}

/// Case-folds a produce code into its storage key.
pub fn normalize_code(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Canonical stored form of a validated record.
pub fn canonicalize_record(produce: Produce) -> Produce {
    Produce {
        code: normalize_code(&produce.code),
        unit_price: canonicalize_price(&produce.unit_price),
        name: produce.name,
    }
}
