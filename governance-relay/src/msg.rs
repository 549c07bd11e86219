use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{CosmosMsg, Uint256};

use common::L1HandlerMsg;
pub use common::WardResponse;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub ward: String,
    pub messenger: String,
    pub l1_governance_relay: Uint256,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Authorization: Ward only
    Rely { usr: String },

    /// Authorization: Ward only
    Deny { usr: String },

    /// Inbound message from L1, delivered by the messenger.
    /// `msg` decodes to [`L1GovernanceMsg`].
    HandleL1Message(L1HandlerMsg),
}

/// Handlers reachable from the L1 governance relay.
#[cw_serde]
pub enum L1GovernanceMsg {
    /// Execute the actions of the `spell` contract
    Relay { spell: String },
}

/// Query every spell contract must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum SpellQueryMsg {
    #[returns(ActionsResponse)]
    Actions {},
}

#[cw_serde]
pub struct ActionsResponse {
    pub msgs: Vec<CosmosMsg>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(WardResponse)]
    Wards { user: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub messenger: String,
    pub l1_governance_relay: Uint256,
}
