//! Query handlers for the teleport gateway contract.

use cosmwasm_std::{Deps, StdResult, Uint256};

use crate::msg::{
    BatchedDaiResponse, ConfigResponse, IsOpenResponse, NonceResponse, TeleportResponse,
    ValidDomainResponse,
};
use crate::state::{BATCHED_DAI_TO_FLUSH, CONFIG, IS_OPEN, NONCES, TELEPORTS, VALID_DOMAINS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        dai: config.dai.to_string(),
        messenger: config.messenger.to_string(),
        l1_teleport_bridge: config.l1_teleport_bridge,
        domain: config.domain,
        legacy_events: config.legacy_events,
    })
}

pub fn query_is_open(deps: Deps) -> StdResult<IsOpenResponse> {
    Ok(IsOpenResponse {
        is_open: IS_OPEN.load(deps.storage)?,
    })
}

pub fn query_valid_domains(deps: Deps, domain: Uint256) -> StdResult<ValidDomainResponse> {
    let valid = VALID_DOMAINS
        .may_load(deps.storage, domain.to_be_bytes().as_slice())?
        .unwrap_or(false);
    Ok(ValidDomainResponse { valid })
}

pub fn query_batched_dai_to_flush(deps: Deps, domain: Uint256) -> StdResult<BatchedDaiResponse> {
    let amount = BATCHED_DAI_TO_FLUSH
        .may_load(deps.storage, domain.to_be_bytes().as_slice())?
        .unwrap_or_default();
    Ok(BatchedDaiResponse { amount })
}

pub fn query_nonce(deps: Deps, account: String) -> StdResult<NonceResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(NonceResponse {
        nonce: NONCES.may_load(deps.storage, &account)?.unwrap_or(0),
    })
}

pub fn query_teleport(deps: Deps, sender: String, nonce: u64) -> StdResult<TeleportResponse> {
    let sender = deps.api.addr_validate(&sender)?;
    Ok(TeleportResponse {
        teleport: TELEPORTS.may_load(deps.storage, (&sender, nonce))?,
    })
}
