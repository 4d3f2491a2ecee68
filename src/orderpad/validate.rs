//! Field-level validation.
//!
//! The three per-field parsers are the typed boundary, shared verbatim by the
//! add path and the inline-edit path: each trims the raw input and returns
//! either the typed value or a user-facing error message. `parse_field`
//! dispatches on [`Column`] for callers that pick the field at runtime. Both
//! paths store the trimmed value.

use crate::model::{Column, FieldChange, Warehouse};
use std::str::FromStr;

/// Integer strictly greater than zero. Fractional or non-numeric input is
/// rejected.
pub fn parse_quantity(text: &str) -> Option<u32> {
    match text.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).ok(),
        _ => None,
    }
}

pub const PRODUCT_ERROR: &str = "Product cannot be empty.";
pub const QUANTITY_ERROR: &str = "Quantity must be an integer greater than 0.";
pub const WAREHOUSE_ERROR: &str = "Warehouse must be Primary, Secondary or Temporary.";

/// Trimmed product text, or the user-facing message when it is blank.
pub fn parse_product(raw: &str) -> std::result::Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(PRODUCT_ERROR)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Warehouse member for the trimmed text, or the user-facing message.
pub fn parse_warehouse(raw: &str) -> std::result::Result<Warehouse, &'static str> {
    Warehouse::from_str(raw.trim()).map_err(|_| WAREHOUSE_ERROR)
}

/// Validate raw input for one column, producing a typed change on success.
pub fn parse_field(column: Column, raw: &str) -> std::result::Result<FieldChange, &'static str> {
    match column {
        Column::Product => parse_product(raw).map(FieldChange::Product),
        Column::Quantity => parse_quantity(raw)
            .map(FieldChange::Quantity)
            .ok_or(QUANTITY_ERROR),
        Column::Warehouse => parse_warehouse(raw).map(FieldChange::Warehouse),
    }
}
