//! Registry Contract
//!
//! Each account may bind one L1 address to itself. The direct bridge checks
//! this binding before honouring an L1-initiated forced withdrawal.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
