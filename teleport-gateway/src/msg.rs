//! Message types for the teleport gateway contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

pub use crate::state::TeleportRecord;
pub use common::WardResponse;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub ward: String,
    pub dai: String,
    pub messenger: String,
    pub l1_teleport_bridge: Uint256,
    /// Identifier of this domain
    pub domain: Uint256,
    /// Emit the pre-rename `WormholeInitialized` event
    pub legacy_events: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stop accepting new teleports. Registration and flush still work.
    ///
    /// Authorization: Ward only
    Close {},

    /// Authorization: Ward only
    Rely { usr: String },

    /// Authorization: Ward only
    Deny { usr: String },

    /// Set a per-domain parameter. `what` must be the short string
    /// `valid_domains` and `data` must be 0 or 1.
    ///
    /// Authorization: Ward only
    File {
        what: Uint256,
        domain: Uint256,
        data: Uint256,
    },

    /// Burn `amount` of the caller's DAI towards `target_domain`.
    /// The caller must have approved the gateway for `amount`.
    InitiateTeleport {
        target_domain: Uint256,
        receiver: Uint256,
        amount: Uint256,
        operator: Uint256,
    },

    /// Send one of the caller's initiated teleports to L1. Every field must
    /// match what was initiated; each teleport can be sent once.
    FinalizeRegisterTeleport {
        target_domain: Uint256,
        receiver: Uint256,
        amount: Uint256,
        operator: Uint256,
        nonce: u64,
        timestamp: u64,
    },

    /// Settle the batched debt of `target_domain` on L1
    Flush { target_domain: Uint256 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(IsOpenResponse)]
    IsOpen {},

    #[returns(ValidDomainResponse)]
    ValidDomains { domain: Uint256 },

    #[returns(BatchedDaiResponse)]
    BatchedDaiToFlush { domain: Uint256 },

    /// Nonce the account's next teleport will get
    #[returns(NonceResponse)]
    Nonce { account: String },

    #[returns(TeleportResponse)]
    Teleport { sender: String, nonce: u64 },

    #[returns(WardResponse)]
    Wards { user: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub dai: String,
    pub messenger: String,
    pub l1_teleport_bridge: Uint256,
    pub domain: Uint256,
    pub legacy_events: bool,
}

#[cw_serde]
pub struct IsOpenResponse {
    pub is_open: bool,
}

#[cw_serde]
pub struct ValidDomainResponse {
    pub valid: bool,
}

#[cw_serde]
pub struct BatchedDaiResponse {
    pub amount: Uint256,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct TeleportResponse {
    pub teleport: Option<TeleportRecord>,
}
