//! Handlers for messages from the L1 bridge.
//!
//! The messenger is the only trusted deliverer and `from_address` must be the
//! configured L1 bridge. Any failure reverts the delivery.

use cosmwasm_std::{from_json, DepsMut, MessageInfo, Response, Uint256};

use common::events::{ContractEvent, DepositHandled, ForceWithdrawalHandled};
use common::felt::{felt_to_hex, is_valid_l1_address};
use common::registry::{LookupResponse, RegistryQueryMsg};
use common::token::TokenExecuteMsg;
use common::L1HandlerMsg;

use crate::error::ContractError;
use crate::execute::outgoing::withdraw_messages;
use crate::msg::L1BridgeMsg;
use crate::state::CONFIG;

pub fn execute_handle_l1_message(
    deps: DepsMut,
    info: MessageInfo,
    handler: L1HandlerMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.messenger {
        return Err(ContractError::NotMessenger);
    }
    if handler.from_address != config.l1_bridge {
        return Err(ContractError::InvalidL1Origin);
    }

    let msg: L1BridgeMsg = from_json(&handler.msg)?;
    match msg {
        L1BridgeMsg::HandleDeposit { account, amount } => handle_deposit(deps, account, amount),
        L1BridgeMsg::HandleForceWithdrawal {
            source,
            l1_recipient,
            amount,
        } => handle_force_withdrawal(deps, source, l1_recipient, amount),
    }
}

fn handle_deposit(
    deps: DepsMut,
    account: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let account = deps.api.addr_validate(&account)?;

    let mint = TokenExecuteMsg::Mint {
        account: account.to_string(),
        amount,
    }
    .into_cosmos_msg(&config.dai)?;

    Ok(Response::new()
        .add_message(mint)
        .add_event(
            DepositHandled {
                account: account.clone(),
                amount,
            }
            .into_event(),
        )
        .add_attribute("method", "handle_deposit")
        .add_attribute("account", account)
        .add_attribute("amount", amount.to_string()))
}

/// Works whether or not the bridge is open.
fn handle_force_withdrawal(
    deps: DepsMut,
    source: String,
    l1_recipient: Uint256,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let source = deps.api.addr_validate(&source)?;

    if !is_valid_l1_address(l1_recipient) {
        return Err(ContractError::InvalidL1Address);
    }

    if let Some(registry) = &config.registry {
        let binding: LookupResponse = deps.querier.query_wasm_smart(
            registry,
            &RegistryQueryMsg::Lookup {
                account: source.to_string(),
            },
        )?;
        if binding.l1_address != Some(l1_recipient) {
            return Err(ContractError::L1RecipientMismatch);
        }
    }

    let messages = withdraw_messages(&config, &source, l1_recipient, amount)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            ForceWithdrawalHandled {
                l1_recipient,
                amount,
                source: source.clone(),
            }
            .into_event(),
        )
        .add_attribute("method", "handle_force_withdrawal")
        .add_attribute("source", source)
        .add_attribute("l1_recipient", felt_to_hex(l1_recipient))
        .add_attribute("amount", amount.to_string()))
}
