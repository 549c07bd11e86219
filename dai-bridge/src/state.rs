use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:dai-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Op-code of the withdrawal message consumed by the L1 bridge
pub const FINALIZE_WITHDRAW: u8 = 0;

#[cw_serde]
pub struct Config {
    pub dai: Addr,
    pub messenger: Addr,
    /// L1 bridge address (felt)
    pub l1_bridge: Uint256,
    /// Consulted on forced withdrawals when set
    pub registry: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Cleared by `close`; never set again
pub const IS_OPEN: Item<bool> = Item::new("is_open");
