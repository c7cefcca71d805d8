use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A country as listed by the country directory.
///
/// Two countries are equal when their codes match (ASCII case-insensitive);
/// the display name is ignored. This keeps same-country detection correct
/// when the provider and client countries were selected as separate values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, in the case returned by the directory.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Country {}

/// Outcome of a standard VAT rate lookup for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatRate {
    /// The country's "Standard" rate category, in percent.
    Standard(Decimal),
    /// No rate could be resolved; the country is treated as outside the VAT zone.
    Unavailable,
}

impl VatRate {
    /// Percentage used by the resolver. `Unavailable` collapses to zero.
    pub fn percentage(&self) -> Decimal {
        match self {
            Self::Standard(rate) => *rate,
            Self::Unavailable => Decimal::ZERO,
        }
    }
}

impl From<Decimal> for VatRate {
    fn from(rate: Decimal) -> Self {
        Self::Standard(rate)
    }
}

/// Provider or client of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    pub country: Country,
    /// Registered to charge and reclaim VAT.
    pub is_vat_payer: bool,
}

impl PartyInfo {
    pub fn new(name: impl Into<String>, country: Country, is_vat_payer: bool) -> Self {
        Self {
            name: name.into(),
            country,
            is_vat_payer,
        }
    }
}

/// Complete input to VAT resolution, built once from a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub service_name: String,
    /// Net price of the service; always positive.
    pub service_price: Decimal,
    pub provider: PartyInfo,
    pub client: PartyInfo,
}

impl Transaction {
    /// Whether provider and client are in the same country.
    pub fn is_domestic(&self) -> bool {
        self.provider.country == self.client.country
    }
}

/// Derived VAT figures for one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceResult {
    /// Applied VAT percentage (0, the provider's rate or the client's rate).
    pub vat_percentage: Decimal,
    /// VAT amount, rounded half-up to 2 decimal places.
    pub vat_amount: Decimal,
    /// Price plus VAT, rounded half-up to 2 decimal places.
    pub total_cost: Decimal,
}

/// A transaction together with the rates it was evaluated against and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub transaction: Transaction,
    pub provider_vat: VatRate,
    pub client_vat: VatRate,
    pub result: InvoiceResult,
}
