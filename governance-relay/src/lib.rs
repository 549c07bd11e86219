//! Governance Relay Contract
//!
//! Executes governance spells decided on L1. The relay is made a ward of the
//! contracts it governs; a spell is a contract that answers the `Actions`
//! query with the messages the relay should dispatch.
//!
//! Only messages delivered by the messenger and declared by the L1
//! governance relay are executed.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
