//! Execute handlers for the DAI token contract.
//!
//! - `ledger` - transfers, allowances and burns
//! - `admin` - ward-gated minting and ward management

mod admin;
mod ledger;

pub use admin::*;
pub use ledger::*;
