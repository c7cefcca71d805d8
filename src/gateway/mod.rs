//! Country directory and VAT rate lookups.
//!
//! Both upstream services are third-party HTTP APIs. Their failures are
//! absorbed here: an unreachable directory yields a static fallback list,
//! and a failed rate lookup places the country outside the VAT zone.
//!
//! # Example
//!
//! ```ignore
//! use invoicer::gateway::*;
//!
//! let gateway = Gateway::new(Settings::load()?)?;
//! let countries = gateway.list_countries().await;
//! let invoice = gateway.evaluate(form.validate()?).await?;
//! ```

mod client;
mod countries;
mod settings;

use thiserror::Error;

pub use client::Gateway;
pub use countries::{fallback_countries, find_country};
pub use settings::{DEFAULT_DIRECTORY_URL, DEFAULT_RATES_URL, Settings};

/// Errors from the remote lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The country directory could not be fetched or decoded.
    #[error("country directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// No standard VAT rate could be resolved for a country.
    #[error("VAT rate unavailable for '{country}': {reason}")]
    RateUnavailable { country: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}
