//! Core invoice types, VAT applicability rules, and computation.
//!
//! Everything here is pure: no network access and no shared state.
//! Remote rate lookups live in the `gateway` module.

mod compute;
mod error;
mod form;
mod render;
mod resolver;
mod types;

pub use compute::{compute_invoice, price_from_f64};
pub use error::*;
pub use form::{InvoiceForm, parse_price};
pub use render::render_invoice;
pub use resolver::{VatRule, determine_vat_rule, resolve_vat_percentage};
pub use types::*;

/// Resolve the VAT percentage for `transaction` and compute its invoice.
///
/// # Errors
///
/// Returns `InvoicerError::InvalidPrice` if the price cannot be computed.
pub fn evaluate_with_rates(
    transaction: Transaction,
    provider_vat: VatRate,
    client_vat: VatRate,
) -> Result<Invoice, InvoicerError> {
    let vat_percentage = resolve_vat_percentage(
        &transaction.provider,
        provider_vat,
        &transaction.client,
        client_vat,
    );
    let result = compute_invoice(transaction.service_price, vat_percentage)?;
    Ok(Invoice {
        transaction,
        provider_vat,
        client_vat,
        result,
    })
}
