//! DAI Token Contract
//!
//! A fungible token ledger with 256-bit balances and allowances.
//!
//! # Supply
//! - Only wards can mint
//! - Anyone can burn their own balance; others need an allowance
//! - `sum(balances) == total_supply` holds after every call
//!
//! # Allowances
//! - `Uint256::MAX` is the unlimited sentinel and is never spent down
//! - `approve` overwrites, `increase_allowance`/`decrease_allowance` adjust

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
