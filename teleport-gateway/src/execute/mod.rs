//! Execute handlers for the teleport gateway contract.
//!
//! - `admin` - Close, rely, deny and domain configuration
//! - `teleport` - Initiate and register teleports
//! - `flush` - Batched debt settlement

mod admin;
mod flush;
mod teleport;

pub use admin::*;
pub use flush::*;
pub use teleport::*;
