use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:governance-relay";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub messenger: Addr,
    /// L1 governance relay address (felt)
    pub l1_governance_relay: Uint256,
}

pub const CONFIG: Item<Config> = Item::new("config");
