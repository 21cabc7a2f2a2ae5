//! Validation rules for product drafts
//!
//! Validation is a pure function of the draft and the policy. It is shared by
//! the create, update and patch paths and runs before any repository call.

use chrono::NaiveDate;

use super::{ProductDraft, ProductError};

/// Expiration format: two-digit day, two-digit month, four-digit year
pub const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

/// Which zero values count as "empty"
///
/// The default treats `quantity == 0` and `price == 0.0` as missing fields,
/// which rejects free or out-of-stock products. Both can be relaxed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Accept `quantity == 0`
    pub allow_zero_quantity: bool,
    /// Accept `price == 0.0`
    pub allow_zero_price: bool,
}

/// Check a draft against the catalog rules
///
/// Rules are applied in order and the first failure wins:
/// 1. `name`, `code_value` and `expiration` must be non-empty, and `quantity`
///    and `price` non-zero unless the policy allows it → `FieldsEmpty`
/// 2. `expiration` must be a `DD/MM/YYYY` calendar date → `InvalidExpiration`
pub fn validate_product(draft: &ProductDraft, policy: &ValidationPolicy) -> Result<(), ProductError> {
    let quantity_missing = draft.quantity == 0 && !policy.allow_zero_quantity;
    let price_missing = draft.price == 0.0 && !policy.allow_zero_price;

    if draft.name.is_empty()
        || quantity_missing
        || draft.code_value.is_empty()
        || draft.expiration.is_empty()
        || price_missing
    {
        return Err(ProductError::FieldsEmpty);
    }

    parse_expiration(&draft.expiration)?;

    Ok(())
}

/// Parse a `DD/MM/YYYY` expiration into a calendar date
///
/// chrono accepts single-digit days and months for `%d`/`%m`, so the fixed
/// layout is checked before parsing.
pub fn parse_expiration(value: &str) -> Result<NaiveDate, ProductError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !well_formed {
        return Err(ProductError::invalid_expiration(value));
    }

    NaiveDate::parse_from_str(value, EXPIRATION_FORMAT)
        .map_err(|_| ProductError::invalid_expiration(value))
}
