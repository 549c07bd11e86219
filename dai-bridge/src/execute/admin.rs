//! Ward-gated handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use common::wards;

use crate::error::ContractError;
use crate::state::IS_OPEN;

/// Close the bridge. Closing twice is allowed.
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
