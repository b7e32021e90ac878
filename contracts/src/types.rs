//! Common types used across the engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// A single observation from a price feed.
///
/// `answer` follows the 8-decimal signed-integer convention used by
/// external USD feeds; non-positive answers are rejected by the
/// oracle adapter before any conversion.
#[odra::odra_type]
#[derive(Copy)]
pub struct PriceRound {
    /// Monotonically increasing round identifier
    pub round_id: u64,
    /// Price at 8-decimal precision (signed)
    pub answer: i64,
    /// Block time of the update
    pub updated_at: u64,
}

/// Snapshot of a user's position as seen by the solvency policy.
#[odra::odra_type]
pub struct AccountSummary {
    /// Debt counter (xUSD minted against collateral, 18 decimals)
    pub debt: U256,
    /// USD value of all deposited collateral (18 decimals)
    pub collateral_value: U256,
}
