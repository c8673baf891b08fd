//! Money helpers
//!
//! Amounts are plain [`Decimal`] values in a single implied currency. The
//! engine keeps full precision internally; these helpers round only for
//! presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for monetary amounts.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Round an amount to currency precision, half away from zero.
#[must_use]
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Present an amount with exactly two decimal places.
#[must_use]
pub fn present_price(amount: Decimal) -> String {
    format!("{:.2}", round_price(amount))
}
