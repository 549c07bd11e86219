//! Batched debt settlement.

use cosmwasm_std::{DepsMut, Response, Uint256};

use common::events::{ContractEvent, Flushed};
use common::felt::{felt_to_hex, split_uint256};
use common::messaging::send_message_to_l1;

use crate::error::ContractError;
use crate::state::{BATCHED_DAI_TO_FLUSH, CONFIG, FINALIZE_FLUSH};

/// Send the batched debt of `target_domain` to L1 and reset it.
///
/// Anyone may flush, and flushing works while the gateway is closed.
pub fn execute_flush(deps: DepsMut, target_domain: Uint256) -> Result<Response, ContractError> {
    let domain_key = target_domain.to_be_bytes();
    let dai = BATCHED_DAI_TO_FLUSH
        .may_load(deps.storage, domain_key.as_slice())?
        .unwrap_or_default();
    if dai.is_zero() {
        return Err(ContractError::ValueIsZero);
    }
    BATCHED_DAI_TO_FLUSH.remove(deps.storage, domain_key.as_slice());

    let config = CONFIG.load(deps.storage)?;
    let [low, high] = split_uint256(dai);
    let payload = vec![Uint256::from(FINALIZE_FLUSH), target_domain, low, high];
    let send = send_message_to_l1(&config.messenger, config.l1_teleport_bridge, payload)?;

    Ok(Response::new()
        .add_message(send)
        .add_event(Flushed { target_domain, dai }.into_event())
        .add_attribute("method", "flush")
        .add_attribute("target_domain", felt_to_hex(target_domain))
        .add_attribute("dai", dai.to_string()))
}
