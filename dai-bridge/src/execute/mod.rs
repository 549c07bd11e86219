//! Execute handlers for the direct bridge contract.
//!
//! - `admin` - Close, rely and deny
//! - `outgoing` - User-initiated withdrawals
//! - `incoming` - Messages from the L1 bridge

mod admin;
mod incoming;
mod outgoing;

pub use admin::*;
pub use incoming::*;
pub use outgoing::*;
