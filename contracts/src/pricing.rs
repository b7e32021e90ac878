//! Price conversions between collateral quantities and USD value.
//!
//! Feed answers arrive at 8-decimal precision; both conversions
//! normalize to 18-decimal fixed point. Callers must have validated the
//! price through the oracle adapter first (positive and fresh).

use odra::casper_types::U256;

use crate::policy::{ADDITIONAL_FEED_PRECISION, PRECISION};

/// USD value (18 decimals) of `amount` units of a token priced at
/// `price` (8 decimals).
pub fn usd_from_token(price: U256, amount: U256) -> U256 {
    price * U256::from(ADDITIONAL_FEED_PRECISION) * amount / U256::from(PRECISION)
}

/// Token quantity (18 decimals) worth `usd_amount` (18 decimals) at
/// `price` (8 decimals).
pub fn token_from_usd(price: U256, usd_amount: U256) -> U256 {
    usd_amount * U256::from(PRECISION) / (price * U256::from(ADDITIONAL_FEED_PRECISION))
}
