//! Plain-text rendering of an evaluated invoice.

use super::types::Invoice;

/// Render the invoice header and its single-row service table.
pub fn render_invoice(invoice: &Invoice) -> String {
    let tx = &invoice.transaction;
    let result = &invoice.result;

    let headers = [
        "Service".to_string(),
        "Service price".to_string(),
        format!("VAT({}%)", result.vat_percentage.normalize()),
        "Total price".to_string(),
    ];
    let row = [
        tx.service_name.clone(),
        tx.service_price.normalize().to_string(),
        result.vat_amount.to_string(),
        result.total_cost.to_string(),
    ];
    let widths: Vec<usize> = headers
        .iter()
        .zip(&row)
        .map(|(h, r)| h.chars().count().max(r.chars().count()))
        .collect();

    let mut out = format!(
        "{}\n{}\n\nBilled to:\n{}\n{}\n\n",
        tx.provider.name, tx.provider.country.name, tx.client.name, tx.client.country.name,
    );
    out.push_str(&table_line(&headers, &widths));
    out.push_str(&table_line(&row, &widths));
    out
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Country, InvoiceResult, PartyInfo, Transaction, VatRate};
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        Invoice {
            transaction: Transaction {
                service_name: "Consulting".into(),
                service_price: dec!(75.50),
                provider: PartyInfo::new("Acme UAB", Country::new("LT", "Lithuania"), true),
                client: PartyInfo::new("Jan Jansen", Country::new("NL", "Netherlands"), false),
            },
            provider_vat: VatRate::Standard(dec!(21)),
            client_vat: VatRate::Standard(dec!(21)),
            result: InvoiceResult {
                vat_percentage: dec!(21),
                vat_amount: dec!(15.86),
                total_cost: dec!(91.36),
            },
        }
    }

    #[test]
    fn renders_header_and_table() {
        insta::assert_snapshot!(render_invoice(&invoice()), @r"
        Acme UAB
        Lithuania

        Billed to:
        Jan Jansen
        Netherlands

        Service    | Service price | VAT(21%) | Total price
        Consulting | 75.5          | 15.86    | 91.36
        ");
    }

    #[test]
    fn fractional_percentage_in_header() {
        let mut inv = invoice();
        inv.result.vat_percentage = dec!(5.50);
        let text = render_invoice(&inv);
        assert!(text.contains("VAT(5.5%)"));
    }
}
