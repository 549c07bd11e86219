//! DAI Token Contract - Entry Points
//!
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint256,
};
use cw2::set_contract_version;

use common::wards;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_burn, execute_decrease_allowance, execute_deny,
    execute_increase_allowance, execute_mint, execute_rely, execute_transfer,
    execute_transfer_from,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_allowance, query_balance_of, query_token_info, query_total_supply};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, TOTAL_SUPPLY};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let ward = deps.api.addr_validate(&msg.ward)?;
    wards::rely(deps.storage, &ward)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint256::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ward", ward))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            sender,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, sender, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::Mint { account, amount } => execute_mint(deps, env, info, account, amount),
        ExecuteMsg::Burn { account, amount } => execute_burn(deps, info, account, amount),
        ExecuteMsg::Rely { usr } => execute_rely(deps, info, usr),
        ExecuteMsg::Deny { usr } => execute_deny(deps, info, usr),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BalanceOf { account } => to_json_binary(&query_balance_of(deps, account)?),
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info()),
        QueryMsg::Wards { user } => to_json_binary(&wards::query_wards(deps, &user)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
