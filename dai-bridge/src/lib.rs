//! Direct DAI Bridge Contract
//!
//! Moves DAI between this chain and L1 one transfer at a time.
//!
//! # Withdrawal (L2 -> L1)
//! 1. User approves the bridge on the DAI contract
//! 2. User calls `InitiateWithdraw`; the bridge burns the user's DAI and sends
//!    `[FINALIZE_WITHDRAW, l1_recipient, amount.low, amount.high]` to L1
//!
//! # Deposit (L1 -> L2)
//! The messenger delivers `HandleDeposit` from the L1 bridge; the bridge mints
//! with its ward authority on the DAI contract.
//!
//! # Forced Withdrawal (L1 -> L2 -> L1)
//! Initiated on L1 for an L2 account that approved the bridge. Works while the
//! bridge is closed.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
