//! Message types for the direct bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

use common::L1HandlerMsg;
pub use common::WardResponse;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub ward: String,
    pub dai: String,
    pub messenger: String,
    pub l1_bridge: Uint256,
    pub registry: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stop accepting withdrawals. Deposits and forced withdrawals still work.
    ///
    /// Authorization: Ward only
    Close {},

    /// Authorization: Ward only
    Rely { usr: String },

    /// Authorization: Ward only
    Deny { usr: String },

    /// Burn `amount` of the caller's DAI and release it to `l1_recipient` on L1.
    /// The caller must have approved the bridge for `amount`.
    InitiateWithdraw { l1_recipient: Uint256, amount: Uint256 },

    /// Inbound message from L1, delivered by the messenger.
    /// `msg` decodes to [`L1BridgeMsg`].
    HandleL1Message(L1HandlerMsg),
}

/// Handlers reachable from the L1 bridge.
#[cw_serde]
pub enum L1BridgeMsg {
    HandleDeposit {
        account: String,
        amount: Uint256,
    },
    HandleForceWithdrawal {
        source: String,
        l1_recipient: Uint256,
        amount: Uint256,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(IsOpenResponse)]
    IsOpen {},

    #[returns(WardResponse)]
    Wards { user: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub dai: String,
    pub messenger: String,
    pub l1_bridge: Uint256,
    pub registry: Option<String>,
}

#[cw_serde]
pub struct IsOpenResponse {
    pub is_open: bool,
}
