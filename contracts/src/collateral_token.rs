//! Generic CEP-18 collateral token.
//!
//! Deployable fungible token with an admin-gated mint, used as deposit
//! collateral in tests and demo setups.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::EngineError;

/// CEP-18 collateral token contract
#[odra::module]
pub struct CollateralToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Admin allowed to mint
    admin: Var<Address>,
}

#[odra::module]
impl CollateralToken {
    /// Initialize the token; the deployer becomes the mint admin.
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
    }

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
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

    /// Mint new tokens (admin only)
    pub fn mint(&mut self, to: Address, amount: U256) {
        let caller = self.env().caller();
        let admin = self.admin.get_or_revert_with(EngineError::Unauthorized);
        if caller != admin {
            self.env().revert(EngineError::Unauthorized);
        }

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply + amount);
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(EngineError::InsufficientTokenBalance);
        }

        self.balances.set(&from, from_balance - amount);

        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }
}
