//! Error types for the teleport gateway contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("l2_dai_teleport_gateway/not-authorized")]
    NotAuthorized,

    #[error("l2_dai_teleport_gateway/gateway-closed")]
    GatewayClosed,

    #[error("l2_dai_teleport_gateway/file-unrecognized-param")]
    FileUnrecognizedParam,

    #[error("l2_dai_teleport_gateway/invalid-data")]
    InvalidData,

    #[error("l2_dai_teleport_gateway/invalid-domain")]
    InvalidDomain,

    /// Teleport amounts must fit one 128-bit limb
    #[error("l2_dai_teleport_gateway/invalid-amount")]
    InvalidAmount,

    #[error("l2_dai_teleport_gateway/invalid-l1-address")]
    InvalidL1Address,

    #[error("l2_dai_teleport_gateway/value-is-zero")]
    ValueIsZero,

    #[error("l2_dai_teleport_gateway/teleport-not-found")]
    TeleportNotFound,

    #[error("l2_dai_teleport_gateway/teleport-mismatch")]
    TeleportMismatch,

    #[error("l2_dai_teleport_gateway/teleport-already-registered")]
    TeleportAlreadyRegistered,
}
