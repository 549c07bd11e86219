//! Typed contract events.
//!
//! Every event kind is a struct with a fixed, ordered attribute list. Off-chain
//! indexers rely on the attribute order and on `schema_version`, so fields are
//! only ever appended together with a version bump.

use cosmwasm_std::{Addr, Attribute, Event, Uint256};

use crate::felt::felt_to_hex;

/// Version of the attribute layout of all events below.
pub const EVENT_SCHEMA_VERSION: &str = "1";

/// Rendering of the zero account in `Transfer` events.
pub const ZERO_ACCOUNT: &str = "0";

pub trait ContractEvent {
    /// Event type (emitted as `wasm-<NAME>`)
    const NAME: &'static str;

    fn attributes(&self) -> Vec<Attribute>;

    fn into_event(self) -> Event
    where
        Self: Sized,
    {
        Event::new(Self::NAME)
            .add_attribute("schema_version", EVENT_SCHEMA_VERSION)
            .add_attributes(self.attributes())
    }
}

/// Balance movement. Mints come from and burns go to [`ZERO_ACCOUNT`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub sender: Option<Addr>,
    pub recipient: Option<Addr>,
    pub value: Uint256,
}

impl ContractEvent for Transfer {
    const NAME: &'static str = "Transfer";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("sender", account_or_zero(&self.sender)),
            Attribute::new("recipient", account_or_zero(&self.recipient)),
            Attribute::new("value", self.value.to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Approval {
    pub owner: Addr,
    pub spender: Addr,
    pub value: Uint256,
}

impl ContractEvent for Approval {
    const NAME: &'static str = "Approval";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("owner", self.owner.as_str()),
            Attribute::new("spender", self.spender.as_str()),
            Attribute::new("value", self.value.to_string()),
        ]
    }
}

/// Tuple of an initiated teleport, reproduced verbatim on registration.
#[derive(Clone, Debug, PartialEq)]
pub struct TeleportInitialized {
    pub source_domain: Uint256,
    pub target_domain: Uint256,
    pub receiver: Uint256,
    pub operator: Uint256,
    pub amount: Uint256,
    pub nonce: u64,
    pub timestamp: u64,
}

impl ContractEvent for TeleportInitialized {
    const NAME: &'static str = "TeleportInitialized";

    fn attributes(&self) -> Vec<Attribute> {
        teleport_attributes(self)
    }
}

/// Pre-rename form of [`TeleportInitialized`]; same fields, same order.
#[derive(Clone, Debug, PartialEq)]
pub struct WormholeInitialized(pub TeleportInitialized);

impl ContractEvent for WormholeInitialized {
    const NAME: &'static str = "WormholeInitialized";

    fn attributes(&self) -> Vec<Attribute> {
        teleport_attributes(&self.0)
    }
}

/// Emitted when an initiated teleport is sent to L1 for registration.
#[derive(Clone, Debug, PartialEq)]
pub struct TeleportRegisterFinalized(pub TeleportInitialized);

impl ContractEvent for TeleportRegisterFinalized {
    const NAME: &'static str = "TeleportRegisterFinalized";

    fn attributes(&self) -> Vec<Attribute> {
        teleport_attributes(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flushed {
    pub target_domain: Uint256,
    pub dai: Uint256,
}

impl ContractEvent for Flushed {
    const NAME: &'static str = "Flushed";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("target_domain", felt_to_hex(self.target_domain)),
            Attribute::new("dai", self.dai.to_string()),
        ]
    }
}

/// Bridge burn of `amount` owed to `l1_recipient` on L1.
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawInitiated {
    pub l1_recipient: Uint256,
    pub amount: Uint256,
    pub caller: Addr,
}

impl ContractEvent for WithdrawInitiated {
    const NAME: &'static str = "WithdrawInitiated";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("l1_recipient", felt_to_hex(self.l1_recipient)),
            Attribute::new("amount", self.amount.to_string()),
            Attribute::new("caller", self.caller.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DepositHandled {
    pub account: Addr,
    pub amount: Uint256,
}

impl ContractEvent for DepositHandled {
    const NAME: &'static str = "DepositHandled";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("account", self.account.as_str()),
            Attribute::new("amount", self.amount.to_string()),
        ]
    }
}

/// L1-initiated withdrawal of `source`'s funds.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceWithdrawalHandled {
    pub l1_recipient: Uint256,
    pub amount: Uint256,
    pub source: Addr,
}

impl ContractEvent for ForceWithdrawalHandled {
    const NAME: &'static str = "ForceWithdrawalHandled";

    fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("l1_recipient", felt_to_hex(self.l1_recipient)),
            Attribute::new("amount", self.amount.to_string()),
            Attribute::new("source", self.source.as_str()),
        ]
    }
}

fn account_or_zero(account: &Option<Addr>) -> String {
    account
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_else(|| ZERO_ACCOUNT.to_string())
}

fn teleport_attributes(t: &TeleportInitialized) -> Vec<Attribute> {
    vec![
        Attribute::new("source_domain", felt_to_hex(t.source_domain)),
        Attribute::new("target_domain", felt_to_hex(t.target_domain)),
        Attribute::new("receiver", felt_to_hex(t.receiver)),
        Attribute::new("operator", felt_to_hex(t.operator)),
        Attribute::new("amount", t.amount.to_string()),
        Attribute::new("nonce", t.nonce.to_string()),
        Attribute::new("timestamp", t.timestamp.to_string()),
    ]
}
