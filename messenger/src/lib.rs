//! Messenger Contract
//!
//! Local model of the L1 <-> L2 messaging transport.
//!
//! # L2 -> L1
//! Any contract may `SendMessageToL1`. Each send increments a counter keyed by
//! the message hash; the sequencer consumes one unit per L1-side processing.
//!
//! # L1 -> L2
//! The sequencer calls `SendMessageToL2` with a declared L1 sender. The
//! messenger stamps a nonce and delivers `HandleL1Message` to the target.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
