use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use common::felt::{felt_to_hex, is_valid_l1_address};
use common::wards;
use common::L1HandlerMsg;

use crate::error::ContractError;
use crate::msg::{
    ActionsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, L1GovernanceMsg, MigrateMsg,
    QueryMsg, SpellQueryMsg,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if !is_valid_l1_address(msg.l1_governance_relay) {
        return Err(ContractError::InvalidL1Address);
    }

    let ward = deps.api.addr_validate(&msg.ward)?;
    let config = Config {
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l1_governance_relay: msg.l1_governance_relay,
    };
    CONFIG.save(deps.storage, &config)?;
    wards::rely(deps.storage, &ward)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ward", ward)
        .add_attribute(
            "l1_governance_relay",
            felt_to_hex(config.l1_governance_relay),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Rely { usr } => execute_rely(deps, info, usr),
        ExecuteMsg::Deny { usr } => execute_deny(deps, info, usr),
        ExecuteMsg::HandleL1Message(handler) => execute_handle_l1_message(deps, info, handler),
    }
}

fn execute_rely(deps: DepsMut, info: MessageInfo, usr: String) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    Ok(wards::execute_rely(deps, &usr)?)
}

fn execute_deny(deps: DepsMut, info: MessageInfo, usr: String) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    Ok(wards::execute_deny(deps, &usr)?)
}

fn execute_handle_l1_message(
    deps: DepsMut,
    info: MessageInfo,
    handler: L1HandlerMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.messenger {
        return Err(ContractError::NotMessenger);
    }
    if handler.from_address != config.l1_governance_relay {
        return Err(ContractError::InvalidL1Origin);
    }

    let msg: L1GovernanceMsg = from_json(&handler.msg)?;
    match msg {
        L1GovernanceMsg::Relay { spell } => relay(deps, spell),
    }
}

/// Dispatch the spell's actions with the relay as sender.
fn relay(deps: DepsMut, spell: String) -> Result<Response, ContractError> {
    let spell = deps.api.addr_validate(&spell)?;
    let actions: ActionsResponse = deps
        .querier
        .query_wasm_smart(&spell, &SpellQueryMsg::Actions {})?;

    Ok(Response::new()
        .add_attribute("method", "relay")
        .add_attribute("spell", spell)
        .add_attribute("actions", actions.msgs.len().to_string())
        .add_messages(actions.msgs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Wards { user } => to_json_binary(&wards::query_wards(deps, &user)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        messenger: config.messenger.to_string(),
        l1_governance_relay: config.l1_governance_relay,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
