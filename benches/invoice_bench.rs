use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use invoicer::core::*;

fn filled_form() -> InvoiceForm {
    InvoiceForm {
        service_name: "Web development".into(),
        service_price: "1234.56".into(),
        provider_name: "Acme UAB".into(),
        provider_country: Some(Country::new("LT", "Lithuania")),
        is_provider_vat_payer: true,
        client_name: "Jan Jansen".into(),
        client_country: Some(Country::new("NL", "Netherlands")),
        is_client_vat_payer: false,
    }
}

fn bench_resolve(c: &mut Criterion) {
    let tx = filled_form().validate().unwrap();
    c.bench_function("resolve_vat_percentage", |b| {
        b.iter(|| {
            resolve_vat_percentage(
                black_box(&tx.provider),
                black_box(VatRate::Standard(dec!(21))),
                black_box(&tx.client),
                black_box(VatRate::Standard(dec!(21))),
            )
        })
    });
}

fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute_invoice", |b| {
        b.iter(|| compute_invoice(black_box(dec!(75.50)), black_box(dec!(21))))
    });
}

fn bench_form_to_render(c: &mut Criterion) {
    let form = filled_form();
    c.bench_function("form_validate_evaluate_render", |b| {
        b.iter(|| {
            let tx = black_box(&form).validate().unwrap();
            let inv = evaluate_with_rates(tx, dec!(21).into(), dec!(21).into()).unwrap();
            render_invoice(&inv)
        })
    });
}

criterion_group!(benches, bench_resolve, bench_compute, bench_form_to_render);
criterion_main!(benches);
