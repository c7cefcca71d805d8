//! HTTP client for the country directory and VAT rate services.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::countries::fallback_countries;
use super::settings::Settings;
use super::GatewayError;
use crate::core::{Country, Invoice, InvoicerError, Transaction, VatRate, evaluate_with_rates};

/// Name of the rate category carrying a country's standard rate.
const STANDARD_CATEGORY: &str = "Standard";

/// One record of the country directory response.
#[derive(Debug, Deserialize)]
struct DirectoryRecord {
    #[serde(rename = "alpha2Code")]
    alpha2_code: String,
    name: String,
}

/// VAT rate service response.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: Vec<RateCategory>,
}

#[derive(Debug, Deserialize)]
struct RateCategory {
    name: String,
    #[serde(default)]
    rates: Vec<Decimal>,
}

/// Remote lookups feeding invoice evaluation.
///
/// Every call hits the network; nothing is cached between invoices.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    settings: Settings,
}

impl Gateway {
    /// Build a gateway with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Client` if the HTTP client cannot be built.
    pub fn new(settings: Settings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;
        Ok(Self { http, settings })
    }

    /// Fetch the country directory.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::DirectoryUnavailable` on network, HTTP or
    /// decode failure, and when the directory is empty.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, GatewayError> {
        debug!(url = %self.settings.directory_url, "fetching country directory");

        let mut req = self.http.get(&self.settings.directory_url);
        if let Some(key) = &self.settings.directory_access_key {
            req = req.query(&[("access_key", key)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| GatewayError::DirectoryUnavailable(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::DirectoryUnavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(GatewayError::DirectoryUnavailable(format!("HTTP {status}")));
        }

        parse_directory(&body)
    }

    /// Country choices for the form.
    ///
    /// Falls back to [`fallback_countries`] when the directory is unavailable,
    /// so callers never see a failure.
    pub async fn list_countries(&self) -> Vec<Country> {
        match self.fetch_countries().await {
            Ok(countries) => countries,
            Err(e) => {
                warn!(error = %e, "using fallback country list");
                fallback_countries()
            }
        }
    }

    /// Look up the "Standard" VAT rate for `country_code`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::RateUnavailable` if the request fails, the
    /// country is not covered, or the response has no usable standard rate.
    pub async fn lookup_standard_vat_rate(
        &self,
        country_code: &str,
    ) -> Result<Decimal, GatewayError> {
        let unavailable = |reason: String| GatewayError::RateUnavailable {
            country: country_code.to_string(),
            reason,
        };

        let url = format!(
            "{}/{}",
            self.settings.rates_url.trim_end_matches('/'),
            country_code
        );
        debug!(%url, "looking up VAT rate");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| unavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(unavailable(format!("HTTP {status}")));
        }

        standard_rate(&body).map_err(unavailable)
    }

    /// Resolve the standard rate, treating any failure as outside the VAT zone.
    pub async fn resolve_vat_rate(&self, country_code: &str) -> VatRate {
        match self.lookup_standard_vat_rate(country_code).await {
            Ok(rate) => {
                debug!(country = country_code, %rate, "resolved standard VAT rate");
                VatRate::Standard(rate)
            }
            Err(e) => {
                warn!(error = %e, "treating country as outside the VAT zone");
                VatRate::Unavailable
            }
        }
    }

    /// Resolve both parties' rates concurrently and compute the invoice.
    ///
    /// # Errors
    ///
    /// Returns `InvoicerError::InvalidPrice` if the price cannot be computed.
    /// Rate lookup failures never surface here.
    pub async fn evaluate(&self, transaction: Transaction) -> Result<Invoice, InvoicerError> {
        let (provider_vat, client_vat) = tokio::join!(
            self.resolve_vat_rate(&transaction.provider.country.code),
            self.resolve_vat_rate(&transaction.client.country.code),
        );

        let invoice = evaluate_with_rates(transaction, provider_vat, client_vat)?;
        info!(
            service = %invoice.transaction.service_name,
            vat_percentage = %invoice.result.vat_percentage,
            total_cost = %invoice.result.total_cost,
            "invoice evaluated"
        );
        Ok(invoice)
    }
}

fn parse_directory(body: &str) -> Result<Vec<Country>, GatewayError> {
    let records: Vec<DirectoryRecord> = serde_json::from_str(body)
        .map_err(|e| GatewayError::DirectoryUnavailable(e.to_string()))?;

    if records.is_empty() {
        return Err(GatewayError::DirectoryUnavailable(
            "directory returned no countries".into(),
        ));
    }

    Ok(records
        .into_iter()
        .map(|r| Country::new(r.alpha2_code, r.name))
        .collect())
}

/// Extract rate 0 of the category named exactly "Standard".
fn standard_rate(body: &str) -> Result<Decimal, String> {
    let resp: RatesResponse =
        serde_json::from_str(body).map_err(|e: serde_json::Error| e.to_string())?;

    let category = resp
        .rates
        .iter()
        .find(|c| c.name == STANDARD_CATEGORY)
        .ok_or_else(|| "no Standard rate category".to_string())?;

    category
        .rates
        .first()
        .copied()
        .ok_or_else(|| "Standard rate category has no rates".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_rate_picks_first_standard_entry() {
        let body = r#"{"rates":[
            {"name":"Reduced","rates":[9,5]},
            {"name":"Standard","rates":[21,20],"countries":["LT"]}
        ]}"#;
        assert_eq!(standard_rate(body).unwrap(), dec!(21));
    }

    #[test]
    fn standard_rate_keeps_fraction() {
        let body = r#"{"rates":[{"name":"Standard","rates":[25.5]}]}"#;
        assert_eq!(standard_rate(body).unwrap(), dec!(25.5));
    }

    #[test]
    fn category_name_is_case_sensitive() {
        let body = r#"{"rates":[{"name":"standard","rates":[21]}]}"#;
        assert!(standard_rate(body).is_err());
    }

    #[test]
    fn empty_standard_rates_rejected() {
        let body = r#"{"rates":[{"name":"Standard","rates":[]}]}"#;
        assert!(standard_rate(body).is_err());
    }

    #[test]
    fn unexpected_body_rejected() {
        assert!(standard_rate(r#"{"error":"not found"}"#).is_err());
    }

    #[test]
    fn directory_maps_alpha2_code() {
        let body = r#"[{"name":"Lithuania","alpha2Code":"LT","capital":"Vilnius"}]"#;
        let countries = parse_directory(body).unwrap();
        assert_eq!(countries, vec![Country::new("LT", "Lithuania")]);
        assert_eq!(countries[0].name, "Lithuania");
    }

    #[test]
    fn empty_directory_is_unavailable() {
        assert!(matches!(
            parse_directory("[]"),
            Err(GatewayError::DirectoryUnavailable(_))
        ));
    }

    #[test]
    fn directory_error_object_is_unavailable() {
        let body = r#"{"success":false,"error":{"code":101,"type":"invalid_access_key"}}"#;
        assert!(matches!(
            parse_directory(body),
            Err(GatewayError::DirectoryUnavailable(_))
        ));
    }
}
