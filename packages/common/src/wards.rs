//! Ward-based authorization shared by every administered contract.
//!
//! A ward may mint, configure and pause the contract it is relied on, and may
//! rely or deny other wards. Each contract instance keeps its own ward set in
//! its own storage.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, DepsMut, Response, StdError, StdResult, Storage};
use cw_storage_plus::Map;

/// Key: ward address, Value: always `true` (denied wards are removed)
pub const WARDS: Map<&Addr, bool> = Map::new("wards");

#[cw_serde]
pub struct WardResponse {
    pub is_ward: bool,
}

/// Returns whether `addr` currently holds ward authority.
pub fn is_ward(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(WARDS.may_load(storage, addr)?.unwrap_or(false))
}

/// Grant ward authority.
pub fn rely(storage: &mut dyn Storage, addr: &Addr) -> StdResult<()> {
    WARDS.save(storage, addr, &true)
}

/// Revoke ward authority. Denying a non-ward is a no-op.
pub fn deny(storage: &mut dyn Storage, addr: &Addr) {
    WARDS.remove(storage, addr)
}

/// Fails with the contract's own `unauthorized` error unless `sender` is a ward.
pub fn ensure_ward<E>(storage: &dyn Storage, sender: &Addr, unauthorized: E) -> Result<(), E>
where
    E: From<StdError>,
{
    if !is_ward(storage, sender)? {
        return Err(unauthorized);
    }
    Ok(())
}

/// Shared body of every contract's `Rely`. The caller checks authority first.
pub fn execute_rely(deps: DepsMut, usr: &str) -> StdResult<Response> {
    let usr = deps.api.addr_validate(usr)?;
    rely(deps.storage, &usr)?;

    Ok(Response::new()
        .add_attribute("method", "rely")
        .add_attribute("usr", usr))
}

/// Shared body of every contract's `Deny`. The caller checks authority first.
pub fn execute_deny(deps: DepsMut, usr: &str) -> StdResult<Response> {
    let usr = deps.api.addr_validate(usr)?;
    deny(deps.storage, &usr);

    Ok(Response::new()
        .add_attribute("method", "deny")
        .add_attribute("usr", usr))
}

pub fn query_wards(deps: Deps, user: &str) -> StdResult<WardResponse> {
    let user = deps.api.addr_validate(user)?;
    Ok(WardResponse {
        is_ward: is_ward(deps.storage, &user)?,
    })
}
