//! Teleport Gateway Contract - Entry Points
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
    execute_close, execute_deny, execute_file, execute_finalize_register_teleport, execute_flush,
    execute_initiate_teleport, execute_rely,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_batched_dai_to_flush, query_config, query_is_open, query_nonce, query_teleport,
    query_valid_domains,
};
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

    if !is_valid_l1_address(msg.l1_teleport_bridge) {
        return Err(ContractError::InvalidL1Address);
    }

    let ward = deps.api.addr_validate(&msg.ward)?;
    let config = Config {
        dai: deps.api.addr_validate(&msg.dai)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l1_teleport_bridge: msg.l1_teleport_bridge,
        domain: msg.domain,
        legacy_events: msg.legacy_events,
    };

    CONFIG.save(deps.storage, &config)?;
    IS_OPEN.save(deps.storage, &true)?;
    wards::rely(deps.storage, &ward)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ward", ward)
        .add_attribute("dai", config.dai)
        .add_attribute("domain", felt_to_hex(config.domain))
        .add_attribute("l1_teleport_bridge", felt_to_hex(config.l1_teleport_bridge)))
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
        ExecuteMsg::Close {} => execute_close(deps, info),
        ExecuteMsg::Rely { usr } => execute_rely(deps, info, usr),
        ExecuteMsg::Deny { usr } => execute_deny(deps, info, usr),
        ExecuteMsg::File { what, domain, data } => execute_file(deps, info, what, domain, data),
        ExecuteMsg::InitiateTeleport {
            target_domain,
            receiver,
            amount,
            operator,
        } => execute_initiate_teleport(deps, env, info, target_domain, receiver, amount, operator),
        ExecuteMsg::FinalizeRegisterTeleport {
            target_domain,
            receiver,
            amount,
            operator,
            nonce,
            timestamp,
        } => execute_finalize_register_teleport(
            deps,
            info,
            target_domain,
            receiver,
            amount,
            operator,
            nonce,
            timestamp,
        ),
        ExecuteMsg::Flush { target_domain } => execute_flush(deps, target_domain),
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
        QueryMsg::ValidDomains { domain } => to_json_binary(&query_valid_domains(deps, domain)?),
        QueryMsg::BatchedDaiToFlush { domain } => {
            to_json_binary(&query_batched_dai_to_flush(deps, domain)?)
        }
        QueryMsg::Nonce { account } => to_json_binary(&query_nonce(deps, account)?),
        QueryMsg::Teleport { sender, nonce } => {
            to_json_binary(&query_teleport(deps, sender, nonce)?)
        }
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
