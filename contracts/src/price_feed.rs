//! Push-style USD price feed.
//!
//! A minimal deployable feed with a feeder-gated `set_answer`, used to
//! operate and test the engine end-to-end. Answers follow the external
//! 8-decimal signed convention.

use odra::prelude::*;

use crate::errors::EngineError;
use crate::types::PriceRound;

/// Answer decimals used by USD feeds
pub const FEED_DECIMALS: u8 = 8;

/// USD price feed contract
#[odra::module]
pub struct UsdPriceFeed {
    /// Account allowed to push updates
    feeder: Var<Address>,
    /// Latest answer (8 decimals, signed)
    answer: Var<i64>,
    /// Block time of the latest update
    updated_at: Var<u64>,
    /// Monotonic round counter
    round_id: Var<u64>,
}

#[odra::module]
impl UsdPriceFeed {
    /// Initialize the feed with a first observation; the deployer
    /// becomes the feeder.
    pub fn init(&mut self, initial_answer: i64) {
        let caller = self.env().caller();
        self.feeder.set(caller);
        self.answer.set(initial_answer);
        self.updated_at.set(self.env().get_block_time());
        self.round_id.set(1);
    }

    /// Push a new answer (feeder only)
    pub fn set_answer(&mut self, answer: i64) {
        self.require_feeder();
        let round = self.round_id.get().unwrap_or(0);
        self.answer.set(answer);
        self.updated_at.set(self.env().get_block_time());
        self.round_id.set(round + 1);
    }

    /// Latest observation
    pub fn latest_round(&self) -> PriceRound {
        PriceRound {
            round_id: self.round_id.get().unwrap_or(0),
            answer: self.answer.get().unwrap_or(0),
            updated_at: self.updated_at.get().unwrap_or(0),
        }
    }

    /// Answer decimals
    pub fn decimals(&self) -> u8 {
        FEED_DECIMALS
    }

    /// Get the feeder address
    pub fn get_feeder(&self) -> Option<Address> {
        self.feeder.get()
    }

    fn require_feeder(&self) {
        let caller = self.env().caller();
        let feeder = self.feeder.get_or_revert_with(EngineError::Unauthorized);
        if caller != feeder {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
