//! xUSD Stablecoin Contract
//!
//! CEP-18 compatible USD-pegged token. Minting is gated to a single
//! authority (the engine); burning always acts on the caller's own
//! balance, so the engine must pull tokens into custody first.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::EngineError;

/// xUSD token decimals
const DECIMALS: u8 = 18;

/// xUSD Stablecoin Contract
#[odra::module]
pub struct XUsd {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Sole account allowed to mint (the engine, once wired)
    authority: Var<Address>,
}

#[odra::module]
impl XUsd {
    /// Initialize the stablecoin; the deployer holds the mint authority
    /// until it is handed to the engine.
    pub fn init(&mut self) {
        self.name.set(String::from("xUSD Stablecoin"));
        self.symbol.set(String::from("xUSD"));
        self.total_supply.set(U256::zero());
        self.authority.set(self.env().caller());
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_else(|| String::from("xUSD Stablecoin"))
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_else(|| String::from("xUSD"))
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Protocol Functions (Restricted) ==========

    /// Mint new tokens (authority only)
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_authority();
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply + amount);
        true
    }

    /// Burn tokens from the caller's own balance
    pub fn burn(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::AmountZero);
        }

        let caller = self.env().caller();
        let current_balance = self.balance_of(caller);
        if current_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.balances.set(&caller, current_balance - amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);
    }

    /// Hand the mint authority to a new account (current authority only).
    /// Deployment wires the engine in here.
    pub fn set_authority(&mut self, new_authority: Address) {
        self.require_authority();
        self.authority.set(new_authority);
    }

    /// Get the current mint authority
    pub fn get_authority(&self) -> Option<Address> {
        self.authority.get()
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.balances.set(&from, from_balance - amount);

        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }

    fn require_authority(&self) {
        let caller = self.env().caller();
        let authority = self.authority.get_or_revert_with(EngineError::Unauthorized);
        if caller != authority {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
