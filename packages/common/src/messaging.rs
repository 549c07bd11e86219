//! Cross-domain messaging interface.
//!
//! # Outbound (L2 -> L1)
//! Contracts send `SendMessageToL1` to the messenger with a flat payload of
//! felt words. The transport lets the L1 side consume each sent message once.
//!
//! # Inbound (L1 -> L2)
//! The messenger delivers `HandleL1Message(L1HandlerMsg)` to the target
//! contract. `from_address` is the declared L1 origin; `msg` is the JSON of
//! the target's handler variant, decoded the same way a CW20 `Receive` hook
//! decodes its inner message.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, Uint256, WasmMsg};
use serde::Serialize;

use crate::felt::keccak256;

/// Inbound message as seen by the receiving contract.
#[cw_serde]
pub struct L1HandlerMsg {
    /// Declared L1 sender of the message
    pub from_address: Uint256,
    /// JSON-encoded handler variant
    pub msg: Binary,
}

#[cw_serde]
enum L1ReceiverExecuteMsg {
    HandleL1Message(L1HandlerMsg),
}

impl L1HandlerMsg {
    pub fn new<T: Serialize>(from_address: Uint256, msg: &T) -> StdResult<Self> {
        Ok(Self {
            from_address,
            msg: to_json_binary(msg)?,
        })
    }

    /// Wrap into the `HandleL1Message` execute call on `contract_addr`.
    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&L1ReceiverExecuteMsg::HandleL1Message(self))?,
            funds: vec![],
        }))
    }
}

/// Messenger entry point used by sending contracts.
#[cw_serde]
pub enum MessengerExecuteMsg {
    SendMessageToL1 {
        to_address: Uint256,
        payload: Vec<Uint256>,
    },
}

/// Build the outbound send to the messenger.
pub fn send_message_to_l1(
    messenger: &Addr,
    to_address: Uint256,
    payload: Vec<Uint256>,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessageToL1 {
            to_address,
            payload,
        })?,
        funds: vec![],
    }))
}

/// Identity of an L2 -> L1 message.
///
/// # Byte Layout
/// - 32 bytes: keccak256 of the sender address string
/// - 32 bytes: L1 recipient
/// - 32 bytes: payload length (big-endian, left-padded)
/// - 32 bytes per payload word
pub fn message_hash(from_address: &str, to_address: Uint256, payload: &[Uint256]) -> [u8; 32] {
    let mut data = Vec::with_capacity(96 + payload.len() * 32);
    data.extend_from_slice(&keccak256(from_address.as_bytes()));
    data.extend_from_slice(&to_address.to_be_bytes());
    data.extend_from_slice(&Uint256::from(payload.len() as u64).to_be_bytes());
    for word in payload {
        data.extend_from_slice(&word.to_be_bytes());
    }
    keccak256(&data)
}
