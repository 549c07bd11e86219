//! Direct Bridge Contract - Entry Points
//!
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::felt::{felt_to_hex, is_valid_l1_address};
use common::wards;

use crate::error::ContractError;
use crate::execute::{
    execute_close, execute_deny, execute_handle_l1_message, execute_initiate_withdraw,
    execute_rely,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_is_open};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, IS_OPEN};

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

    if !is_valid_l1_address(msg.l1_bridge) {
        return Err(ContractError::InvalidL1Address);
    }

    let ward = deps.api.addr_validate(&msg.ward)?;
    let config = Config {
        dai: deps.api.addr_validate(&msg.dai)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l1_bridge: msg.l1_bridge,
        registry: msg
            .registry
            .map(|r| deps.api.addr_validate(&r))
            .transpose()?,
    };

    CONFIG.save(deps.storage, &config)?;
    IS_OPEN.save(deps.storage, &true)?;
    wards::rely(deps.storage, &ward)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ward", ward)
        .add_attribute("dai", config.dai)
        .add_attribute("l1_bridge", felt_to_hex(config.l1_bridge)))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Close {} => execute_close(deps, info),
        ExecuteMsg::Rely { usr } => execute_rely(deps, info, usr),
        ExecuteMsg::Deny { usr } => execute_deny(deps, info, usr),
        ExecuteMsg::InitiateWithdraw {
            l1_recipient,
            amount,
        } => execute_initiate_withdraw(deps, info, l1_recipient, amount),
        ExecuteMsg::HandleL1Message(handler) => execute_handle_l1_message(deps, info, handler),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsOpen {} => to_json_binary(&query_is_open(deps)?),
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
