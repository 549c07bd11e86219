use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint256,
};
use cw2::set_contract_version;

use common::felt::{felt_to_hex, is_valid_l1_address};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, LookupResponse, QueryMsg};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, L1_ADDRESSES};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register { l1_address } => execute_register(deps, info, l1_address),
    }
}

fn execute_register(
    deps: DepsMut,
    info: MessageInfo,
    l1_address: Uint256,
) -> Result<Response, ContractError> {
    if !is_valid_l1_address(l1_address) {
        return Err(ContractError::InvalidL1Address);
    }
    L1_ADDRESSES.save(deps.storage, &info.sender, &l1_address)?;

    Ok(Response::new()
        .add_attribute("method", "register")
        .add_attribute("account", info.sender)
        .add_attribute("l1_address", felt_to_hex(l1_address)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Lookup { account } => to_json_binary(&query_lookup(deps, account)?),
    }
}

fn query_lookup(deps: Deps, account: String) -> StdResult<LookupResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(LookupResponse {
        l1_address: L1_ADDRESSES.may_load(deps.storage, &account)?,
    })
}
