//! Ward-gated handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint256};

use common::felt::{felt_to_hex, short_string};
use common::wards;

use crate::error::ContractError;
use crate::state::{IS_OPEN, VALID_DOMAINS, VALID_DOMAINS_PARAM};

/// Close the gateway. Closing twice is allowed.
pub fn execute_close(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;
    IS_OPEN.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("method", "close"))
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

pub fn execute_file(
    deps: DepsMut,
    info: MessageInfo,
    what: Uint256,
    domain: Uint256,
    data: Uint256,
) -> Result<Response, ContractError> {
    wards::ensure_ward(deps.storage, &info.sender, ContractError::NotAuthorized)?;

    if what != short_string(VALID_DOMAINS_PARAM)? {
        return Err(ContractError::FileUnrecognizedParam);
    }

    let key = domain.to_be_bytes();
    if data == Uint256::one() {
        VALID_DOMAINS.save(deps.storage, key.as_slice(), &true)?;
    } else if data.is_zero() {
        VALID_DOMAINS.remove(deps.storage, key.as_slice());
    } else {
        return Err(ContractError::InvalidData);
    }

    Ok(Response::new()
        .add_attribute("method", "file")
        .add_attribute("what", VALID_DOMAINS_PARAM)
        .add_attribute("domain", felt_to_hex(domain))
        .add_attribute("data", data.to_string()))
}
