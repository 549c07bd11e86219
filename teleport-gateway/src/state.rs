//! State definitions for the teleport gateway contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:teleport-gateway";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Op-codes of the messages consumed by the L1 teleport bridge
pub const FINALIZE_REGISTER_TELEPORT: u8 = 0;
pub const FINALIZE_FLUSH: u8 = 1;

/// `file` parameter holding the domain whitelist (encoded as a short string)
pub const VALID_DOMAINS_PARAM: &str = "valid_domains";

#[cw_serde]
pub struct Config {
    pub dai: Addr,
    pub messenger: Addr,
    /// L1 teleport bridge address (felt)
    pub l1_teleport_bridge: Uint256,
    /// Identifier of this domain, used as every teleport's source domain
    pub domain: Uint256,
    /// Emit `WormholeInitialized` instead of `TeleportInitialized`
    pub legacy_events: bool,
}

/// A teleport as initiated, plus whether it has been sent for registration.
#[cw_serde]
pub struct TeleportRecord {
    pub source_domain: Uint256,
    pub target_domain: Uint256,
    pub receiver: Uint256,
    pub operator: Uint256,
    pub amount: Uint256,
    pub nonce: u64,
    pub timestamp: u64,
    pub registered: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Cleared by `close`; never set again
pub const IS_OPEN: Item<bool> = Item::new("is_open");

/// domain (big-endian bytes) => whitelisted. Only `true` entries are stored.
pub const VALID_DOMAINS: Map<&[u8], bool> = Map::new("valid_domains");

/// domain (big-endian bytes) => DAI burned for that domain since its last flush
pub const BATCHED_DAI_TO_FLUSH: Map<&[u8], Uint256> = Map::new("batched_dai_to_flush");

/// account => next teleport nonce
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");

/// (initiator, nonce) => teleport
pub const TELEPORTS: Map<(&Addr, u64), TeleportRecord> = Map::new("teleports");
