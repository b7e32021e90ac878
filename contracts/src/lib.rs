//! xUSD CDP Contracts
//!
//! Overcollateralized xUSD stablecoin engine for Casper.
//!
//! ## Architecture
//!
//! - **Engine**: Orchestrates deposit, mint, redeem, burn and liquidate
//!   operations; enforces the solvency policy on every state transition
//! - **Ledger**: Per-user collateral and debt bookkeeping plus the registry
//!   of approved collateral tokens and their price feeds
//! - **SolvencyPolicy**: Pure health-factor computation (threshold 50%,
//!   minimum health factor 1.0)
//! - **OracleAdapter**: Price-feed reads with staleness protection
//! - **Stablecoin (xUSD)**: CEP-18 token with engine-gated mint/burn
//!
//! ## Solvency model
//!
//! Every position must keep `health_factor >= 1.0` (18-decimal fixed
//! point). Positions below the minimum can be liquidated by any third
//! party, who repays debt and receives collateral plus a 10% bonus.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod policy;
pub mod pricing;
pub mod oracle;
pub mod token_adapter;

// Contract modules
pub mod ledger;
pub mod engine;
pub mod stablecoin;
pub mod price_feed;
pub mod collateral_token;
