//! Raw invoice form state and its validation into a [`Transaction`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{Country, PartyInfo, Transaction};

/// Invoice form as filled in by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub service_name: String,
    /// Price exactly as typed.
    pub service_price: String,
    pub provider_name: String,
    pub provider_country: Option<Country>,
    pub is_provider_vat_payer: bool,
    pub client_name: String,
    pub client_country: Option<Country>,
    pub is_client_vat_payer: bool,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            service_price: String::new(),
            provider_name: String::new(),
            provider_country: None,
            is_provider_vat_payer: true,
            client_name: String::new(),
            client_country: None,
            is_client_vat_payer: true,
        }
    }
}

impl InvoiceForm {
    /// Restore the initial, empty form state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate every field and build the transaction.
    ///
    /// All failing fields are reported, not just the first.
    pub fn validate(&self) -> Result<Transaction, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let service_name = required(&self.service_name, "service_name", "Service name", &mut errors);
        let provider_name =
            required(&self.provider_name, "provider_name", "Provider name", &mut errors);
        let client_name = required(&self.client_name, "client_name", "Client name", &mut errors);

        let service_price = match parse_price(&self.service_price) {
            Ok(price) if price > Decimal::ZERO => Some(price),
            Ok(_) => {
                errors.push(ValidationError::new(
                    "service_price",
                    "Service price must be greater than zero",
                ));
                None
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if self.provider_country.is_none() {
            errors.push(ValidationError::new(
                "provider_country",
                "Provider country is required",
            ));
        }
        if self.client_country.is_none() {
            errors.push(ValidationError::new(
                "client_country",
                "Client country is required",
            ));
        }

        match (
            service_name,
            service_price,
            provider_name,
            &self.provider_country,
            client_name,
            &self.client_country,
        ) {
            (
                Some(service_name),
                Some(service_price),
                Some(provider_name),
                Some(provider_country),
                Some(client_name),
                Some(client_country),
            ) if errors.is_empty() => Ok(Transaction {
                service_name,
                service_price,
                provider: PartyInfo::new(
                    provider_name,
                    provider_country.clone(),
                    self.is_provider_vat_payer,
                ),
                client: PartyInfo::new(
                    client_name,
                    client_country.clone(),
                    self.is_client_vat_payer,
                ),
            }),
            _ => Err(errors),
        }
    }
}

fn required(
    value: &str,
    field: &str,
    label: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(ValidationError::new(field, format!("{label} is required")));
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a typed service price.
///
/// Accepts an optional sign followed by digits with an optional fraction
/// (`12`, `12.`, `12.50`) or a bare fraction (`.5`).
pub fn parse_price(input: &str) -> Result<Decimal, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::new(
            "service_price",
            "Service price is required",
        ));
    }

    let not_a_number = || ValidationError::new("service_price", "Service price must be a number");

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    let well_formed = all_digits(int_part)
        && frac_part.is_none_or(all_digits)
        && (!int_part.is_empty() || frac_part.is_some_and(|f| !f.is_empty()));
    if !well_formed {
        return Err(not_a_number());
    }

    let normalized = match frac_part {
        Some(f) if !f.is_empty() => format!(
            "{}.{f}",
            if int_part.is_empty() { "0" } else { int_part }
        ),
        _ => int_part.to_string(),
    };
    let value = Decimal::from_str(&normalized).map_err(|_| not_a_number())?;

    Ok(if negative { -value } else { value })
}
