//! External token interaction layer.
//!
//! Cross-contract calls to CEP-18 collateral tokens and the xUSD
//! stablecoin. A `false` return from a token entry point aborts the
//! whole operation; no partial effect survives.

use odra::prelude::*;
use odra::casper_types::{runtime_args, U256};
use odra::CallDef;

use crate::errors::EngineError;

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn balance_of(&self, account: Address) -> U256;
}

/// xUSD stablecoin interface (engine-gated entry points)
#[odra::external_contract]
pub trait Stablecoin {
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    fn burn(&mut self, amount: U256);
    fn total_supply(&self) -> U256;
}

/// Transfer `amount` of `token` from the calling contract to `recipient`
pub fn transfer(env: &odra::ContractEnv, token: Address, recipient: Address, amount: U256) {
    let args = runtime_args! {
        "recipient" => recipient,
        "amount" => amount
    };
    let call_def = CallDef::new("transfer", true, args);
    let success: bool = env.call_contract(token, call_def);
    if !success {
        env.revert(EngineError::TokenTransferFailed);
    }
}

/// Pull `amount` of `token` from `owner` into `recipient`
pub fn transfer_from(
    env: &odra::ContractEnv,
    token: Address,
    owner: Address,
    recipient: Address,
    amount: U256,
) {
    let args = runtime_args! {
        "owner" => owner,
        "recipient" => recipient,
        "amount" => amount
    };
    let call_def = CallDef::new("transfer_from", true, args);
    let success: bool = env.call_contract(token, call_def);
    if !success {
        env.revert(EngineError::TokenTransferFailed);
    }
}

/// Mint `amount` of the stablecoin to `to`
pub fn mint(env: &odra::ContractEnv, stablecoin: Address, to: Address, amount: U256) {
    let args = runtime_args! {
        "to" => to,
        "amount" => amount
    };
    let call_def = CallDef::new("mint", true, args);
    let success: bool = env.call_contract(stablecoin, call_def);
    if !success {
        env.revert(EngineError::MintFailed);
    }
}

/// Burn `amount` of the stablecoin from the calling contract's custody
pub fn burn(env: &odra::ContractEnv, stablecoin: Address, amount: U256) {
    let args = runtime_args! {
        "amount" => amount
    };
    let call_def = CallDef::new("burn", true, args);
    env.call_contract::<()>(stablecoin, call_def);
}
