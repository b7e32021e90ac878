//! Solvency policy.
//!
//! Pure health-factor computation shared by the engine and exposed for
//! off-chain simulation. Only 50% of raw collateral value counts toward
//! solvency; a position is solvent iff its health factor is at least 1.0
//! in 18-decimal fixed point.

use odra::casper_types::U256;

/// 18-decimal fixed-point scale (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Price feeds report at 8-decimal precision
pub const FEED_PRECISION: u128 = 100_000_000;

/// Factor normalizing an 8-decimal feed answer to 18 decimals (1e10)
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// Share of collateral value counted toward solvency (50%)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for threshold and bonus percentages
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Liquidator bonus, over [`LIQUIDATION_PRECISION`] (10%)
pub const LIQUIDATION_BONUS: u64 = 10;

/// Minimum health factor (1.0 in 18-decimal fixed point)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Compute the health factor for a position.
///
/// Zero debt is unconditionally safe and yields the maximum
/// representable value. Otherwise:
///
/// `hf = (collateral_value_usd * 50 / 100) * 1e18 / debt`
pub fn health_factor(debt: U256, collateral_value_usd: U256) -> U256 {
    if debt.is_zero() {
        return U256::MAX;
    }
    let adjusted = collateral_value_usd * U256::from(LIQUIDATION_THRESHOLD)
        / U256::from(LIQUIDATION_PRECISION);
    adjusted * U256::from(PRECISION) / debt
}

/// Whether a health factor satisfies the solvency minimum.
pub fn is_solvent(factor: U256) -> bool {
    factor >= U256::from(MIN_HEALTH_FACTOR)
}
