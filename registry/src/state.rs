use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::Map;

pub const CONTRACT_NAME: &str = "crates.io:registry";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// account => bound L1 address
pub const L1_ADDRESSES: Map<&Addr, Uint256> = Map::new("l1_addresses");
