//! Oracle adapter.
//!
//! Wraps the external price-feed lookup with staleness protection. Every
//! read re-queries the feed; there is no caching. A price older than the
//! staleness timeout makes the affected collateral token unusable for
//! solvency decisions until a fresh update arrives.

use odra::prelude::*;
use odra::casper_types::{RuntimeArgs, U256};
use odra::CallDef;

use crate::errors::EngineError;
use crate::types::PriceRound;

/// Maximum price age before it is rejected (3 hours, block-time ms)
pub const STALENESS_TIMEOUT: u64 = 3 * 60 * 60 * 1000;

/// Price feed interface for cross-contract calls
#[odra::external_contract]
pub trait PriceFeed {
    /// Latest observation from the feed
    fn latest_round(&self) -> PriceRound;
}

/// Stateless adapter over a price-feed contract
pub struct OracleAdapter;

impl OracleAdapter {
    /// Read the latest price from `feed`, rejecting non-positive answers
    /// and data older than [`STALENESS_TIMEOUT`].
    ///
    /// Returns the price at 8-decimal precision together with its update
    /// timestamp. Both conversion directions go through this check; the
    /// engine never consumes an unchecked read.
    pub fn fresh_price(env: &odra::ContractEnv, feed: Address) -> (U256, u64) {
        let round = Self::latest_round(env, feed);

        if round.answer <= 0 {
            env.revert(EngineError::InvalidPrice);
        }

        let now = env.get_block_time();
        if now.saturating_sub(round.updated_at) > STALENESS_TIMEOUT {
            env.revert(EngineError::StalePrice);
        }

        (U256::from(round.answer as u64), round.updated_at)
    }

    fn latest_round(env: &odra::ContractEnv, feed: Address) -> PriceRound {
        let call_def = CallDef::new("latest_round", false, RuntimeArgs::new());
        env.call_contract::<PriceRound>(feed, call_def)
    }
}
