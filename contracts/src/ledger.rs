//! Collateral and debt ledger.
//!
//! Owns the registry of approved collateral tokens (fixed at
//! construction), per-user collateral positions and per-user debt
//! counters. The debt counter is internal accounting, independent of the
//! stablecoin contract's own balance ledger. Positions are created
//! implicitly at zero and only ever driven back to zero, never deleted.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::EngineError;

/// Ledger submodule of the engine
#[odra::module]
pub struct Ledger {
    /// Approved collateral tokens in registration order
    collateral_tokens: Var<Vec<Address>>,
    /// Price feed per registered token
    price_feeds: Mapping<Address, Address>,
    /// (user, token) -> deposited amount
    collateral: Mapping<(Address, Address), U256>,
    /// user -> minted debt counter
    debt: Mapping<Address, U256>,
    /// Sum of all debt counters
    total_debt: Var<U256>,
}

#[odra::module]
impl Ledger {
    /// Register the collateral set. Called once at engine construction;
    /// there is no add/remove operation afterwards.
    pub fn register(&mut self, tokens: Vec<Address>, feeds: Vec<Address>) {
        if tokens.len() != feeds.len() {
            self.env().revert(EngineError::RegistryLengthMismatch);
        }
        for (token, feed) in tokens.iter().zip(feeds.iter()) {
            self.price_feeds.set(token, *feed);
        }
        self.collateral_tokens.set(tokens);
        self.total_debt.set(U256::zero());
    }

    /// Increment a user's collateral position
    pub fn deposit(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }
        self.require_registered(token);

        let key = (user, token);
        let current = self.collateral.get(&key).unwrap_or(U256::zero());
        self.collateral.set(&key, current + amount);
    }

    /// Decrement `from`'s collateral position; the engine routes the
    /// token payout. Decrementing beyond the recorded position is a
    /// hard failure, never a wrap.
    pub fn withdraw(&mut self, from: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }
        self.require_registered(token);

        let key = (from, token);
        let current = self.collateral.get(&key).unwrap_or(U256::zero());
        if current < amount {
            self.env().revert(EngineError::InsufficientCollateral);
        }
        self.collateral.set(&key, current - amount);
    }

    /// Increment a user's debt counter
    pub fn mint_debt(&mut self, user: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }
        let current = self.debt.get(&user).unwrap_or(U256::zero());
        self.debt.set(&user, current + amount);

        let total = self.total_debt.get().unwrap_or(U256::zero());
        self.total_debt.set(total + amount);
    }

    /// Decrement a user's debt counter, failing on underflow
    pub fn burn_debt(&mut self, user: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }
        let current = self.debt.get(&user).unwrap_or(U256::zero());
        if current < amount {
            self.env().revert(EngineError::InsufficientDebt);
        }
        self.debt.set(&user, current - amount);

        let total = self.total_debt.get().unwrap_or(U256::zero());
        self.total_debt.set(total - amount);
    }

    // ========== Read Access ==========

    /// Deposited amount for (user, token)
    pub fn collateral_of(&self, user: Address, token: Address) -> U256 {
        self.collateral.get(&(user, token)).unwrap_or(U256::zero())
    }

    /// Debt counter for a user
    pub fn debt_of(&self, user: Address) -> U256 {
        self.debt.get(&user).unwrap_or(U256::zero())
    }

    /// Sum of all debt counters
    pub fn get_total_debt(&self) -> U256 {
        self.total_debt.get().unwrap_or(U256::zero())
    }

    /// Registered tokens in registration order
    pub fn tokens(&self) -> Vec<Address> {
        self.collateral_tokens.get().unwrap_or_default()
    }

    /// Price feed for a registered token
    pub fn feed_of(&self, token: Address) -> Address {
        self.price_feeds
            .get(&token)
            .unwrap_or_else(|| self.env().revert(EngineError::TokenNotRegistered))
    }

    /// Whether a token is in the registry
    pub fn is_registered(&self, token: Address) -> bool {
        self.price_feeds.get(&token).is_some()
    }

    fn require_registered(&self, token: Address) {
        if !self.is_registered(token) {
            self.env().revert(EngineError::TokenNotRegistered);
        }
    }
}
