//! DAI Teleport Gateway Contract
//!
//! Burn now, settle later.
//!
//! # Teleport Flow
//! 1. User approves the gateway on the DAI contract
//! 2. `InitiateTeleport` burns the DAI, assigns the user's next nonce, stores
//!    the teleport and adds the amount to the target domain's batched debt.
//!    No L1 message is sent.
//! 3. Optionally, `FinalizeRegisterTeleport` sends the stored teleport to the
//!    L1 teleport bridge so it can be proven on the target domain.
//! 4. `Flush` sends the whole batched debt of a domain to L1 in one message.
//!
//! Registration and flush are independent: funds leave at step 2 and are
//! settled by step 4 whether or not step 3 ever happens.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
