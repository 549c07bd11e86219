//! Common - Shared Types and Utilities for the DAI Bridge Contracts
//!
//! This package provides the pieces every contract in the workspace agrees on:
//! felt encoding for cross-domain payloads, ward-based authorization, typed
//! events, and the wire interfaces of the token, registry and messenger.

pub mod events;
pub mod felt;
pub mod messaging;
pub mod registry;
pub mod token;
pub mod wards;

pub use events::ContractEvent;
pub use messaging::L1HandlerMsg;
pub use wards::WardResponse;
