//! VAT amount and total cost for a single service price.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::error::InvoicerError;
use super::types::InvoiceResult;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Compute VAT amount and total for `price` at `vat_percentage`.
///
/// - `vat_amount = round2(price * vat_percentage / 100)`
/// - `total_cost = round2(price + vat_amount)`
///
/// Rounding is half-up (commercial rounding); both amounts carry exactly
/// two decimal places.
///
/// # Errors
///
/// Returns `InvoicerError::InvalidPrice` for a negative price or when the
/// arithmetic overflows.
pub fn compute_invoice(
    price: Decimal,
    vat_percentage: Decimal,
) -> Result<InvoiceResult, InvoicerError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(InvoicerError::InvalidPrice(format!(
            "price must not be negative, got {price}"
        )));
    }

    let vat_amount = price
        .checked_mul(vat_percentage)
        .and_then(|v| v.checked_div(HUNDRED))
        .map(round_half_up)
        .ok_or_else(|| InvoicerError::InvalidPrice(format!("price {price} is out of range")))?;

    let total_cost = price
        .checked_add(vat_amount)
        .map(round_half_up)
        .ok_or_else(|| InvoicerError::InvalidPrice(format!("price {price} is out of range")))?;

    Ok(InvoiceResult {
        vat_percentage,
        vat_amount,
        total_cost,
    })
}

/// Convert a floating-point price into a `Decimal`.
///
/// # Errors
///
/// Returns `InvoicerError::InvalidPrice` for NaN, infinities and negative values.
pub fn price_from_f64(value: f64) -> Result<Decimal, InvoicerError> {
    if !value.is_finite() {
        return Err(InvoicerError::InvalidPrice(format!(
            "price must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(InvoicerError::InvalidPrice(format!(
            "price must not be negative, got {value}"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| InvoicerError::InvalidPrice(format!("price {value} is out of range")))
}

/// Round to 2 decimal places half-up and pin the scale to 2.
fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
