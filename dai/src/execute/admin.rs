//! Ward-gated handlers.
//!
//! - Mint
//! - Rely/deny wards

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint256};

use common::events::{ContractEvent, Transfer};
use common::wards;

use crate::error::ContractError;
use crate::execute::ledger::{credit, validate_recipient};
use crate::state::TOTAL_SUPPLY;

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    account: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    let account = validate_recipient(deps.as_ref(), &env, &account)?;

    let total_supply = TOTAL_SUPPLY
        .load(deps.storage)?
        .checked_add(amount)
        .map_err(|_| ContractError::Uint256Overflow)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;
    credit(deps.storage, &account, amount)?;

    Ok(Response::new()
        .add_event(
            Transfer {
                sender: None,
                recipient: Some(account.clone()),
                value: amount,
            }
            .into_event(),
        )
        .add_attribute("method", "mint")
        .add_attribute("account", account)
        .add_attribute("amount", amount.to_string())
        .add_attribute("total_supply", total_supply.to_string()))
}

pub fn execute_rely(
    deps: DepsMut,
    info: MessageInfo,
    usr: String,
) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    Ok(wards::execute_rely(deps, &usr)?)
}

pub fn execute_deny(
    deps: DepsMut,
    info: MessageInfo,
    usr: String,
) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    Ok(wards::execute_deny(deps, &usr)?)
}
