//! # invoicer
//!
//! Single-service invoice generation with EU-style VAT applicability rules.
//!
//! Given a provider, a client, a service and its price, the crate resolves
//! which VAT percentage the provider charges (domestic rate, reverse charge,
//! cross-border B2C rate, or none) and computes the VAT amount and total.
//! All monetary values use [`rust_decimal::Decimal`].
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicer::core::*;
//! use rust_decimal_macros::dec;
//!
//! let form = InvoiceForm {
//!     service_name: "Consulting".into(),
//!     service_price: "100".into(),
//!     provider_name: "Acme UAB".into(),
//!     provider_country: Some(Country::new("LT", "Lithuania")),
//!     client_name: "Klientas UAB".into(),
//!     client_country: Some(Country::new("LT", "Lithuania")),
//!     ..InvoiceForm::default()
//! };
//!
//! let tx = form.validate().unwrap();
//! let invoice = evaluate_with_rates(tx, dec!(21).into(), dec!(21).into()).unwrap();
//! assert_eq!(invoice.result.total_cost, dec!(121.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, VAT resolver, computation, form validation, rendering |
//! | `gateway` | Country directory and VAT rate HTTP lookups, settings |
//! | `cli` | `invoicer` command-line binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "gateway")]
pub mod gateway;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
