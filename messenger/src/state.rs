use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:messenger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Account allowed to consume L2 -> L1 messages and inject L1 -> L2 ones
pub const SEQUENCER: Item<Addr> = Item::new("sequencer");

/// message hash => number of sent but unconsumed copies
pub const L2_TO_L1_MESSAGES: Map<&[u8], u64> = Map::new("l2_to_l1_messages");

/// Nonce of the next L1 -> L2 message
pub const L1_TO_L2_NONCE: Item<u64> = Item::new("l1_to_l2_nonce");
