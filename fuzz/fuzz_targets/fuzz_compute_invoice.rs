#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (i64, u32, u16)| {
    let (mantissa, scale, rate) = input;
    let Ok(price) = Decimal::try_from_i128_with_scale(i128::from(mantissa), scale % 29) else {
        return;
    };
    // Any price, including huge ones, yields a result or an error, never a panic.
    let _ = invoicer::core::compute_invoice(price, Decimal::from(rate % 101));
});
