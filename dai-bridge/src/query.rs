//! Query handlers for the direct bridge contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{ConfigResponse, IsOpenResponse};
use crate::state::{CONFIG, IS_OPEN};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        dai: config.dai.to_string(),
        messenger: config.messenger.to_string(),
        l1_bridge: config.l1_bridge,
        registry: config.registry.map(|r| r.to_string()),
    })
}

pub fn query_is_open(deps: Deps) -> StdResult<IsOpenResponse> {
    Ok(IsOpenResponse {
        is_open: IS_OPEN.load(deps.storage)?,
    })
}
