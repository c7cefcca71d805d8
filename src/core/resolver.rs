//! Decide which VAT percentage a provider charges on a service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{PartyInfo, VatRate};

/// The rule that decided the applicable VAT percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatRule {
    /// Provider is not VAT-registered and charges no VAT.
    ProviderNotVatPayer,
    /// Provider or client resolved to a zero rate (outside the VAT zone).
    OutsideVatZone,
    /// Both parties in the same country; the domestic standard rate applies.
    Domestic,
    /// Cross-border B2B; VAT liability shifts to the client.
    ReverseCharge,
    /// Cross-border B2C; the client's country standard rate applies.
    CrossBorderConsumer,
}

impl VatRule {
    /// Whether the rule charges the client's country rate.
    pub fn charges_client_rate(&self) -> bool {
        matches!(self, Self::Domestic | Self::CrossBorderConsumer)
    }
}

/// Determine which VAT rule applies to a transaction.
///
/// # Logic
///
/// First matching rule wins:
///
/// 1. Provider is not a VAT payer → `ProviderNotVatPayer`
/// 2. Either rate collapses to 0 → `OutsideVatZone`
/// 3. Same country (by code) → `Domestic`
/// 4. Client is a VAT payer → `ReverseCharge`
/// 5. Otherwise → `CrossBorderConsumer`
pub fn determine_vat_rule(
    provider: &PartyInfo,
    provider_vat: VatRate,
    client: &PartyInfo,
    client_vat: VatRate,
) -> VatRule {
    if !provider.is_vat_payer {
        return VatRule::ProviderNotVatPayer;
    }

    // A zero-rated country and an unavailable rate are indistinguishable here.
    if client_vat.percentage().is_zero() || provider_vat.percentage().is_zero() {
        return VatRule::OutsideVatZone;
    }

    if provider.country == client.country {
        return VatRule::Domestic;
    }

    if client.is_vat_payer {
        return VatRule::ReverseCharge;
    }

    VatRule::CrossBorderConsumer
}

/// Compute the VAT percentage the provider charges.
///
/// Always 0 or the client's resolved rate, never a blend.
pub fn resolve_vat_percentage(
    provider: &PartyInfo,
    provider_vat: VatRate,
    client: &PartyInfo,
    client_vat: VatRate,
) -> Decimal {
    if determine_vat_rule(provider, provider_vat, client, client_vat).charges_client_rate() {
        client_vat.percentage()
    } else {
        Decimal::ZERO
    }
}
