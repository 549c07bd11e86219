//! Withdrawal handlers.

use cosmwasm_std::{Addr, CosmosMsg, DepsMut, MessageInfo, Response, StdResult, Uint256};

use common::events::{ContractEvent, WithdrawInitiated};
use common::felt::{felt_to_hex, is_valid_l1_address, split_uint256};
use common::messaging::send_message_to_l1;
use common::token::TokenExecuteMsg;

use crate::error::ContractError;
use crate::state::{Config, CONFIG, FINALIZE_WITHDRAW, IS_OPEN};

/// Burn `amount` from `account` and tell the L1 bridge to release it.
///
/// The burn is issued by the bridge, so `account` must have approved the
/// bridge on the DAI contract.
pub(crate) fn withdraw_messages(
    config: &Config,
    account: &Addr,
    l1_recipient: Uint256,
    amount: Uint256,
) -> StdResult<Vec<CosmosMsg>> {
    let burn = TokenExecuteMsg::Burn {
        account: account.to_string(),
        amount,
    }
    .into_cosmos_msg(&config.dai)?;

    let [low, high] = split_uint256(amount);
    let payload = vec![
        Uint256::from(FINALIZE_WITHDRAW),
        l1_recipient,
        low,
        high,
    ];
    let send = send_message_to_l1(&config.messenger, config.l1_bridge, payload)?;

    Ok(vec![burn, send])
}

pub fn execute_initiate_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    l1_recipient: Uint256,
    amount: Uint256,
) -> Result<Response, ContractError> {
    if !IS_OPEN.load(deps.storage)? {
        return Err(ContractError::BridgeClosed);
    }
    if !is_valid_l1_address(l1_recipient) {
        return Err(ContractError::InvalidL1Address);
    }

    let config = CONFIG.load(deps.storage)?;
    let messages = withdraw_messages(&config, &info.sender, l1_recipient, amount)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            WithdrawInitiated {
                l1_recipient,
                amount,
                caller: info.sender.clone(),
            }
            .into_event(),
        )
        .add_attribute("method", "initiate_withdraw")
        .add_attribute("caller", info.sender)
        .add_attribute("l1_recipient", felt_to_hex(l1_recipient))
        .add_attribute("amount", amount.to_string()))
}
