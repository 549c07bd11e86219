//! Error types for the DAI token contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("dai/not-authorized")]
    NotAuthorized,

    #[error("dai/invalid-recipient")]
    InvalidRecipient,

    #[error("dai/insufficient-balance")]
    InsufficientBalance,

    #[error("dai/insufficient-allowance")]
    InsufficientAllowance,

    #[error("dai/uint256-overflow")]
    Uint256Overflow,
}
