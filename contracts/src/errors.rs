//! Engine error definitions.

use odra::prelude::*;

/// xUSD engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Invalid argument errors (1xx)
    AmountZero = 100,
    TokenNotRegistered = 101,
    RegistryLengthMismatch = 102,

    // Balance errors (2xx)
    InsufficientCollateral = 200,
    InsufficientDebt = 201,
    InsufficientTokenBalance = 202,

    // External call errors (3xx)
    TokenTransferFailed = 300,
    MintFailed = 301,

    // Oracle errors (4xx)
    StalePrice = 400,
    InvalidPrice = 401,

    // Solvency errors (5xx)
    HealthFactorBroken = 500,
    HealthFactorOk = 501,
    HealthFactorNotImproved = 502,

    // Reentrancy errors (6xx)
    ReentrantCall = 600,

    // Access control errors (7xx)
    Unauthorized = 700,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Invalid argument
            EngineError::AmountZero => "Amount must be greater than zero",
            EngineError::TokenNotRegistered => "Collateral token not registered",
            EngineError::RegistryLengthMismatch => {
                "Token and price feed lists must have equal length"
            }

            // Balance
            EngineError::InsufficientCollateral => "Withdraw exceeds recorded collateral",
            EngineError::InsufficientDebt => "Burn exceeds recorded debt",
            EngineError::InsufficientTokenBalance => "Insufficient token balance",

            // External call
            EngineError::TokenTransferFailed => "Token transfer failed",
            EngineError::MintFailed => "Stablecoin mint failed",

            // Oracle
            EngineError::StalePrice => "Oracle price is stale",
            EngineError::InvalidPrice => "Oracle price is zero or negative",

            // Solvency
            EngineError::HealthFactorBroken => "Health factor below minimum",
            EngineError::HealthFactorOk => "Health factor is not below minimum",
            EngineError::HealthFactorNotImproved => "Liquidation did not improve health factor",

            // Reentrancy
            EngineError::ReentrantCall => "Reentrant call rejected",

            // Access control
            EngineError::Unauthorized => "Unauthorized caller",
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EngineError> for OdraError {
    fn from(error: EngineError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
