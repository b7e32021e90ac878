//! Engine Contract
//!
//! Orchestrates deposit, mint, redeem, burn and liquidate operations
//! against the ledger, valuing collateral through the oracle adapter and
//! enforcing the solvency policy on every state transition.
//!
//! Every mutating entry point follows check-effect-interact ordering:
//! ledger state is updated before any external token call, and a
//! reentrancy latch rejects nested invocation of mutating entry points
//! while one is in flight. A revert rolls back the entire call, so every
//! operation either fully completes or has no effect.
//!
//! Known limitation: system-wide insolvency (total collateral value
//! below total debt) is not handled; liquidations that cannot restore
//! solvency keep failing.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::EngineError;
use crate::ledger::Ledger;
use crate::oracle::{OracleAdapter, STALENESS_TIMEOUT};
use crate::policy;
use crate::pricing;
use crate::token_adapter;
use crate::types::AccountSummary;

/// xUSD CDP Engine Contract
#[odra::module]
pub struct Engine {
    /// Collateral registry and position bookkeeping
    ledger: SubModule<Ledger>,
    /// xUSD stablecoin contract address
    stablecoin: Var<Address>,
    /// Reentrancy latch; held while a mutating entry point is in flight
    entered: Var<bool>,
}

#[odra::module]
impl Engine {
    /// Initialize the engine with the approved collateral set.
    ///
    /// `collateral_tokens` and `price_feeds` are matched pairwise;
    /// mismatched lengths fail construction outright. The registry is
    /// immutable afterwards.
    pub fn init(
        &mut self,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        stablecoin: Address,
    ) {
        self.ledger.register(collateral_tokens, price_feeds);
        self.stablecoin.set(stablecoin);
        self.entered.set(false);
    }

    // ========== Mutating Entry Points ==========

    /// Deposit collateral into the caller's position.
    ///
    /// Pulls `amount` of `token` from the caller into engine custody.
    /// Depositing can only improve the health factor, so no solvency
    /// check runs afterwards.
    pub fn deposit_collateral(&mut self, token: Address, amount: U256) {
        self.acquire_latch();
        self.deposit_internal(token, amount);
        self.release_latch();
    }

    /// Mint xUSD against the caller's collateral.
    ///
    /// Fails with `HealthFactorBroken` if the position would drop below
    /// the minimum health factor; the whole transition reverts.
    pub fn mint(&mut self, amount: U256) {
        self.acquire_latch();
        self.mint_internal(amount);
        self.release_latch();
    }

    /// Deposit collateral and mint xUSD in one atomic call.
    pub fn deposit_collateral_and_mint(
        &mut self,
        token: Address,
        collateral_amount: U256,
        mint_amount: U256,
    ) {
        self.acquire_latch();
        self.deposit_internal(token, collateral_amount);
        self.mint_internal(mint_amount);
        self.release_latch();
    }

    /// Withdraw collateral from the caller's position.
    ///
    /// The position must stay solvent after the redemption.
    pub fn redeem_collateral(&mut self, token: Address, amount: U256) {
        self.acquire_latch();
        let caller = self.env().caller();
        self.redeem_internal(caller, caller, token, amount);
        self.revert_if_insolvent(caller);
        self.release_latch();
    }

    /// Burn xUSD to reduce the caller's debt.
    ///
    /// Pulls the tokens from the caller into engine custody and burns
    /// them. Burning debt can only improve the health factor; the
    /// post-check stays in place as defense in depth.
    pub fn burn(&mut self, amount: U256) {
        self.acquire_latch();
        let caller = self.env().caller();
        self.burn_internal(caller, caller, amount);
        self.revert_if_insolvent(caller);
        self.release_latch();
    }

    /// Burn xUSD and withdraw collateral in one atomic call, with a
    /// single solvency check after both steps.
    pub fn redeem_collateral_for_xusd(
        &mut self,
        token: Address,
        collateral_amount: U256,
        burn_amount: U256,
    ) {
        self.acquire_latch();
        let caller = self.env().caller();
        self.burn_internal(caller, caller, burn_amount);
        self.redeem_internal(caller, caller, token, collateral_amount);
        self.revert_if_insolvent(caller);
        self.release_latch();
    }

    /// Liquidate an insolvent position.
    ///
    /// The caller repays `debt_to_cover` of `user`'s debt and receives
    /// the equivalent amount of `token` plus a 10% bonus, paid entirely
    /// from `user`'s position in that same token. If that balance cannot
    /// cover it, the whole liquidation fails; there is no partial fill.
    ///
    /// The target's health factor must strictly improve, and the final
    /// gate re-checks the liquidator's own solvency so a liquidation can
    /// never put the liquidator underwater.
    pub fn liquidate(&mut self, token: Address, user: Address, debt_to_cover: U256) {
        self.acquire_latch();
        if debt_to_cover.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }

        let starting_health_factor = self.health_factor_internal(user);
        if policy::is_solvent(starting_health_factor) {
            self.env().revert(EngineError::HealthFactorOk);
        }

        let token_from_debt = self.token_amount_from_usd_internal(token, debt_to_cover);
        let bonus = token_from_debt * U256::from(policy::LIQUIDATION_BONUS)
            / U256::from(policy::LIQUIDATION_PRECISION);
        let seized = token_from_debt + bonus;

        let liquidator = self.env().caller();
        self.redeem_internal(user, liquidator, token, seized);
        self.burn_internal(user, liquidator, debt_to_cover);

        let ending_health_factor = self.health_factor_internal(user);
        if ending_health_factor <= starting_health_factor {
            // Unreachable under correct bonus math; a live occurrence
            // is a policy bug, not a recoverable condition.
            self.env().revert(EngineError::HealthFactorNotImproved);
        }

        self.revert_if_insolvent(liquidator);
        self.release_latch();
    }

    // ========== Read-Only Entry Points ==========

    /// Current health factor for a user (18-decimal fixed point;
    /// `U256::MAX` for zero debt)
    pub fn health_factor_of(&self, user: Address) -> U256 {
        self.health_factor_internal(user)
    }

    /// Pure health-factor computation over explicit inputs, for
    /// off-chain simulation
    pub fn calculate_health_factor(&self, debt: U256, collateral_value_usd: U256) -> U256 {
        policy::health_factor(debt, collateral_value_usd)
    }

    /// Debt counter and total collateral value for a user
    pub fn account_summary(&self, user: Address) -> AccountSummary {
        AccountSummary {
            debt: self.ledger.debt_of(user),
            collateral_value: self.total_collateral_value_internal(user),
        }
    }

    /// USD value of all of a user's collateral, summed over every
    /// registered token
    pub fn total_collateral_value_of(&self, user: Address) -> U256 {
        self.total_collateral_value_internal(user)
    }

    /// USD value (18 decimals) of `amount` units of `token` at the
    /// current fresh price
    pub fn usd_value(&self, token: Address, amount: U256) -> U256 {
        let feed = self.ledger.feed_of(token);
        let (price, _) = OracleAdapter::fresh_price(&self.env(), feed);
        pricing::usd_from_token(price, amount)
    }

    /// Quantity of `token` worth `usd_amount` at the current fresh price
    pub fn token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        self.token_amount_from_usd_internal(token, usd_amount)
    }

    /// Deposited amount for (user, token)
    pub fn collateral_balance_of(&self, user: Address, token: Address) -> U256 {
        self.ledger.collateral_of(user, token)
    }

    /// Debt counter for a user
    pub fn debt_of(&self, user: Address) -> U256 {
        self.ledger.debt_of(user)
    }

    /// Sum of all debt counters; equals the xUSD supply minted through
    /// the engine
    pub fn total_debt(&self) -> U256 {
        self.ledger.get_total_debt()
    }

    /// Registered collateral tokens in registration order
    pub fn collateral_tokens(&self) -> Vec<Address> {
        self.ledger.tokens()
    }

    /// Price feed registered for a token
    pub fn price_feed_of(&self, token: Address) -> Address {
        self.ledger.feed_of(token)
    }

    /// xUSD stablecoin contract address
    pub fn stablecoin_address(&self) -> Option<Address> {
        self.stablecoin.get()
    }

    // ========== Policy Constants ==========

    /// Share of collateral value counted toward solvency (percent)
    pub fn liquidation_threshold(&self) -> u64 {
        policy::LIQUIDATION_THRESHOLD
    }

    /// Liquidator bonus (percent)
    pub fn liquidation_bonus(&self) -> u64 {
        policy::LIQUIDATION_BONUS
    }

    /// Denominator for threshold and bonus percentages
    pub fn liquidation_precision(&self) -> u64 {
        policy::LIQUIDATION_PRECISION
    }

    /// Minimum health factor (18-decimal fixed point)
    pub fn min_health_factor(&self) -> U256 {
        U256::from(policy::MIN_HEALTH_FACTOR)
    }

    /// 18-decimal fixed-point scale
    pub fn precision(&self) -> U256 {
        U256::from(policy::PRECISION)
    }

    /// Maximum price age before solvency-dependent reads fail
    pub fn staleness_timeout(&self) -> u64 {
        STALENESS_TIMEOUT
    }

    // ========== Internal Operations ==========

    fn deposit_internal(&mut self, token: Address, amount: U256) {
        let caller = self.env().caller();
        self.ledger.deposit(caller, token, amount);

        let this = self.env().self_address();
        token_adapter::transfer_from(&self.env(), token, caller, this, amount);
    }

    fn mint_internal(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.ledger.mint_debt(caller, amount);
        // Solvency gate runs before the external mint so a reentrant
        // callback can never observe uncovered debt.
        self.revert_if_insolvent(caller);

        let stablecoin = self.stablecoin_or_revert();
        token_adapter::mint(&self.env(), stablecoin, caller, amount);
    }

    /// Decrement `from`'s collateral and pay the tokens out to `to`.
    /// Solvency checking is the caller's responsibility.
    fn redeem_internal(&mut self, from: Address, to: Address, token: Address, amount: U256) {
        self.ledger.withdraw(from, token, amount);
        token_adapter::transfer(&self.env(), token, to, amount);
    }

    /// Reduce `on_behalf_of`'s debt by pulling xUSD from `payer` into
    /// custody and burning it.
    fn burn_internal(&mut self, on_behalf_of: Address, payer: Address, amount: U256) {
        self.ledger.burn_debt(on_behalf_of, amount);

        let stablecoin = self.stablecoin_or_revert();
        let this = self.env().self_address();
        token_adapter::transfer_from(&self.env(), stablecoin, payer, this, amount);
        token_adapter::burn(&self.env(), stablecoin, amount);
    }

    fn total_collateral_value_internal(&self, user: Address) -> U256 {
        let mut total = U256::zero();
        // One pass over the fixed registry; zero positions contribute
        // nothing and skip the oracle read.
        for token in self.ledger.tokens() {
            let amount = self.ledger.collateral_of(user, token);
            if amount.is_zero() {
                continue;
            }
            let feed = self.ledger.feed_of(token);
            let (price, _) = OracleAdapter::fresh_price(&self.env(), feed);
            total = total + pricing::usd_from_token(price, amount);
        }
        total
    }

    fn token_amount_from_usd_internal(&self, token: Address, usd_amount: U256) -> U256 {
        let feed = self.ledger.feed_of(token);
        let (price, _) = OracleAdapter::fresh_price(&self.env(), feed);
        pricing::token_from_usd(price, usd_amount)
    }

    fn health_factor_internal(&self, user: Address) -> U256 {
        let debt = self.ledger.debt_of(user);
        let collateral_value = self.total_collateral_value_internal(user);
        policy::health_factor(debt, collateral_value)
    }

    fn revert_if_insolvent(&self, user: Address) {
        let factor = self.health_factor_internal(user);
        if !policy::is_solvent(factor) {
            self.env().revert(EngineError::HealthFactorBroken);
        }
    }

    fn stablecoin_or_revert(&self) -> Address {
        self.stablecoin
            .get_or_revert_with(EngineError::TokenNotRegistered)
    }

    // ========== Reentrancy Latch ==========

    /// Acquire the latch on entry to a mutating entry point. A nested
    /// invocation while the latch is held is rejected outright; a revert
    /// anywhere in the operation rolls the latch back together with the
    /// rest of the state.
    fn acquire_latch(&mut self) {
        if self.entered.get().unwrap_or(false) {
            self.env().revert(EngineError::ReentrantCall);
        }
        self.entered.set(true);
    }

    fn release_latch(&mut self) {
        self.entered.set(false);
    }
}
