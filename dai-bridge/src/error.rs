//! Error types for the direct bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("l2_dai_bridge/not-authorized")]
    NotAuthorized,

    #[error("l2_dai_bridge/bridge-closed")]
    BridgeClosed,

    #[error("l2_dai_bridge/invalid-l1-address")]
    InvalidL1Address,

    /// Inbound message not delivered by the messenger
    #[error("l2_dai_bridge/not-messenger")]
    NotMessenger,

    /// Inbound message declared by an L1 sender other than the L1 bridge
    #[error("l2_dai_bridge/invalid-l1-origin")]
    InvalidL1Origin,

    #[error("l2_dai_bridge/l1-recipient-mismatch")]
    L1RecipientMismatch,
}
