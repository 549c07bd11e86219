use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

pub use common::registry::{LookupResponse, RegistryQueryMsg as QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Bind the caller to `l1_address`, replacing any earlier binding
    Register { l1_address: Uint256 },
}
