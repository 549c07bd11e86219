//! State definitions for the DAI token contract

use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:dai";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = "Dai Stablecoin";
pub const SYMBOL: &str = "DAI";
pub const DECIMALS: u8 = 18;

pub const TOTAL_SUPPLY: Item<Uint256> = Item::new("total_supply");

/// Key: holder, Value: balance
pub const BALANCES: Map<&Addr, Uint256> = Map::new("balances");

/// Key: (owner, spender), Value: remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint256> = Map::new("allowances");
