//! Balance and allowance handlers.

use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Response, Storage, Uint256};

use common::events::{Approval, ContractEvent, Transfer};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES, TOTAL_SUPPLY};

// ============================================================================
// Validation & Bookkeeping
// ============================================================================

/// A recipient must be a valid address and must not be this contract.
pub(crate) fn validate_recipient(
    deps: Deps,
    env: &Env,
    recipient: &str,
) -> Result<Addr, ContractError> {
    let addr = deps
        .api
        .addr_validate(recipient)
        .map_err(|_| ContractError::InvalidRecipient)?;
    if addr == env.contract.address {
        return Err(ContractError::InvalidRecipient);
    }
    Ok(addr)
}

fn validate_spender(deps: Deps, spender: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(spender)
        .map_err(|_| ContractError::InvalidRecipient)
}

pub(crate) fn balance_of(storage: &dyn Storage, account: &Addr) -> Result<Uint256, ContractError> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub(crate) fn allowance_of(
    storage: &dyn Storage,
    owner: &Addr,
    spender: &Addr,
) -> Result<Uint256, ContractError> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: Uint256) -> Result<(), ContractError> {
    let balance = balance_of(storage, account)?;
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance)?;
    BALANCES.save(storage, account, &remaining)?;
    Ok(())
}

pub(crate) fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint256,
) -> Result<(), ContractError> {
    let balance = balance_of(storage, account)?;
    let updated = balance
        .checked_add(amount)
        .map_err(|_| ContractError::Uint256Overflow)?;
    BALANCES.save(storage, account, &updated)?;
    Ok(())
}

/// Spend `amount` of `spender`'s allowance over `owner`'s funds.
///
/// The unlimited sentinel (`Uint256::MAX`) is left untouched.
fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint256,
) -> Result<(), ContractError> {
    let allowance = allowance_of(storage, owner, spender)?;
    if allowance == Uint256::MAX {
        return Ok(());
    }
    let remaining = allowance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientAllowance)?;
    ALLOWANCES.save(storage, (owner, spender), &remaining)?;
    Ok(())
}

fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint256,
) -> Result<Response, ContractError> {
    ALLOWANCES.save(storage, (owner, spender), &amount)?;

    Ok(Response::new()
        .add_event(
            Approval {
                owner: owner.clone(),
                spender: spender.clone(),
                value: amount,
            }
            .into_event(),
        )
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("allowance", amount.to_string()))
}

fn move_funds(
    storage: &mut dyn Storage,
    sender: &Addr,
    recipient: &Addr,
    amount: Uint256,
) -> Result<Response, ContractError> {
    debit(storage, sender, amount)?;
    credit(storage, recipient, amount)?;

    Ok(Response::new()
        .add_event(
            Transfer {
                sender: Some(sender.clone()),
                recipient: Some(recipient.clone()),
                value: amount,
            }
            .into_event(),
        )
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Transfers
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let recipient = validate_recipient(deps.as_ref(), &env, &recipient)?;
    let res = move_funds(deps.storage, &info.sender, &recipient, amount)?;
    Ok(res.add_attribute("method", "transfer"))
}

/// Transfer on behalf of `sender`.
///
/// A holder moving their own funds needs no allowance.
pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&sender)?;
    let recipient = validate_recipient(deps.as_ref(), &env, &recipient)?;

    if info.sender != sender {
        spend_allowance(deps.storage, &sender, &info.sender, amount)?;
    }

    let res = move_funds(deps.storage, &sender, &recipient, amount)?;
    Ok(res
        .add_attribute("method", "transfer_from")
        .add_attribute("spender", info.sender))
}

// ============================================================================
// Allowances
// ============================================================================

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_spender(deps.as_ref(), &spender)?;
    let res = set_allowance(deps.storage, &info.sender, &spender, amount)?;
    Ok(res.add_attribute("method", "approve"))
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_spender(deps.as_ref(), &spender)?;
    let current = allowance_of(deps.storage, &info.sender, &spender)?;
    let updated = current
        .checked_add(amount)
        .map_err(|_| ContractError::Uint256Overflow)?;

    let res = set_allowance(deps.storage, &info.sender, &spender, updated)?;
    Ok(res.add_attribute("method", "increase_allowance"))
}

/// Decreasing the unlimited sentinel turns it into a finite allowance.
pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_spender(deps.as_ref(), &spender)?;
    let current = allowance_of(deps.storage, &info.sender, &spender)?;
    let updated = current
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientAllowance)?;

    let res = set_allowance(deps.storage, &info.sender, &spender, updated)?;
    Ok(res.add_attribute("method", "decrease_allowance"))
}

// ============================================================================
// Burn
// ============================================================================

/// Burn from `account`.
///
/// Self-burn needs no allowance. Anyone else, wards included, spends
/// allowance exactly like `transfer_from`.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let account = deps.api.addr_validate(&account)?;

    if info.sender != account {
        spend_allowance(deps.storage, &account, &info.sender, amount)?;
    }

    debit(deps.storage, &account, amount)?;
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    // sum(balances) == total_supply, so a successful debit bounds the supply
    let total_supply = total_supply
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;

    Ok(Response::new()
        .add_event(
            Transfer {
                sender: Some(account.clone()),
                recipient: None,
                value: amount,
            }
            .into_event(),
        )
        .add_attribute("method", "burn")
        .add_attribute("account", account)
        .add_attribute("burner", info.sender)
        .add_attribute("amount", amount.to_string()))
}
