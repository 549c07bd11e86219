use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account relaying between domains
    pub sequencer: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record an L2 -> L1 message from the calling contract
    SendMessageToL1 {
        to_address: Uint256,
        payload: Vec<Uint256>,
    },

    /// Consume one copy of an L2 -> L1 message
    ///
    /// Authorization: Sequencer only
    ConsumeMessageFromL2 {
        from_address: String,
        to_address: Uint256,
        payload: Vec<Uint256>,
    },

    /// Deliver an L1 -> L2 message; `msg` is the JSON of the target's handler
    ///
    /// Authorization: Sequencer only
    SendMessageToL2 {
        from_address: Uint256,
        to_address: String,
        msg: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Number of unconsumed copies of an L2 -> L1 message
    #[returns(MessageCountResponse)]
    MessageCount {
        from_address: String,
        to_address: Uint256,
        payload: Vec<Uint256>,
    },

    #[returns(NonceResponse)]
    L1ToL2Nonce {},

    #[returns(SequencerResponse)]
    Sequencer {},
}

#[cw_serde]
pub struct MessageCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct SequencerResponse {
    pub sequencer: String,
}
