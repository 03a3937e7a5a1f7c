//! Currency conversion logic.
//!
//! Only the USD/AED pair is converted; every other pair passes through at
//! rate 1. Full floating-point precision is carried forward, rounding to
//! 2 decimals happens only at presentation time.

use tracing::warn;

use super::code::Currency;

/// Fixed exchange rate: 1 USD = 3.6725 AED.
///
/// Compiled-in by design; isolated here so it can become configurable later.
pub const USD_TO_AED: f64 = 3.6725;

/// Converts an amount from one currency to another.
///
/// - Same currency: identity.
/// - USD -> AED: multiply by [`USD_TO_AED`].
/// - AED -> USD: divide by [`USD_TO_AED`].
/// - Any other pair (e.g. EUR or GBP lines in a USD/AED report) passes
///   through unchanged. This mirrors the stored data's behavior and is
///   flagged with a warning rather than rejected.
#[must_use]
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    match (from, to) {
        (f, t) if f == t => amount,
        (Currency::Usd, Currency::Aed) => amount * USD_TO_AED,
        (Currency::Aed, Currency::Usd) => amount / USD_TO_AED,
        (f, t) => {
            warn!(from = %f, to = %t, "unsupported currency pair, amount passed through at rate 1");
            amount
        }
    }
}
