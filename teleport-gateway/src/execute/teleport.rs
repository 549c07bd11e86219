//! Teleport initiation and registration.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, Uint256};

use common::events::{
    ContractEvent, TeleportInitialized, TeleportRegisterFinalized, WormholeInitialized,
};
use common::felt::fits_single_limb;
use common::messaging::send_message_to_l1;
use common::token::TokenExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    TeleportRecord, BATCHED_DAI_TO_FLUSH, CONFIG, FINALIZE_REGISTER_TELEPORT, IS_OPEN, NONCES,
    TELEPORTS, VALID_DOMAINS,
};

pub fn execute_initiate_teleport(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    target_domain: Uint256,
    receiver: Uint256,
    amount: Uint256,
    operator: Uint256,
) -> Result<Response, ContractError> {
    if !IS_OPEN.load(deps.storage)? {
        return Err(ContractError::GatewayClosed);
    }

    let domain_key = target_domain.to_be_bytes();
    if !VALID_DOMAINS
        .may_load(deps.storage, domain_key.as_slice())?
        .unwrap_or(false)
    {
        return Err(ContractError::InvalidDomain);
    }
    if !fits_single_limb(amount) {
        return Err(ContractError::InvalidAmount);
    }

    let config = CONFIG.load(deps.storage)?;

    let nonce = NONCES.may_load(deps.storage, &info.sender)?.unwrap_or(0);
    NONCES.save(deps.storage, &info.sender, &(nonce + 1))?;

    let timestamp = env.block.time.seconds();
    let record = TeleportRecord {
        source_domain: config.domain,
        target_domain,
        receiver,
        operator,
        amount,
        nonce,
        timestamp,
        registered: false,
    };
    TELEPORTS.save(deps.storage, (&info.sender, nonce), &record)?;

    let batched = BATCHED_DAI_TO_FLUSH
        .may_load(deps.storage, domain_key.as_slice())?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(StdError::from)?;
    BATCHED_DAI_TO_FLUSH.save(deps.storage, domain_key.as_slice(), &batched)?;

    let burn = TokenExecuteMsg::Burn {
        account: info.sender.to_string(),
        amount,
    }
    .into_cosmos_msg(&config.dai)?;

    let initialized = teleport_event(&record);
    let event = if config.legacy_events {
        WormholeInitialized(initialized).into_event()
    } else {
        initialized.into_event()
    };

    Ok(Response::new()
        .add_message(burn)
        .add_event(event)
        .add_attribute("method", "initiate_teleport")
        .add_attribute("sender", info.sender)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("batched_dai_to_flush", batched.to_string()))
}

/// Send one of the caller's teleports to the L1 teleport bridge.
///
/// Works whether or not the gateway is open.
#[allow(clippy::too_many_arguments)]
pub fn execute_finalize_register_teleport(
    deps: DepsMut,
    info: MessageInfo,
    target_domain: Uint256,
    receiver: Uint256,
    amount: Uint256,
    operator: Uint256,
    nonce: u64,
    timestamp: u64,
) -> Result<Response, ContractError> {
    let mut record = TELEPORTS
        .may_load(deps.storage, (&info.sender, nonce))?
        .ok_or(ContractError::TeleportNotFound)?;

    if record.target_domain != target_domain
        || record.receiver != receiver
        || record.amount != amount
        || record.operator != operator
        || record.timestamp != timestamp
    {
        return Err(ContractError::TeleportMismatch);
    }
    if record.registered {
        return Err(ContractError::TeleportAlreadyRegistered);
    }

    record.registered = true;
    TELEPORTS.save(deps.storage, (&info.sender, nonce), &record)?;

    let config = CONFIG.load(deps.storage)?;
    let payload = vec![
        Uint256::from(FINALIZE_REGISTER_TELEPORT),
        record.source_domain,
        record.target_domain,
        record.receiver,
        record.operator,
        record.amount,
        Uint256::from(record.nonce),
        Uint256::from(record.timestamp),
    ];
    let send = send_message_to_l1(&config.messenger, config.l1_teleport_bridge, payload)?;

    Ok(Response::new()
        .add_message(send)
        .add_event(TeleportRegisterFinalized(teleport_event(&record)).into_event())
        .add_attribute("method", "finalize_register_teleport")
        .add_attribute("sender", info.sender)
        .add_attribute("nonce", nonce.to_string()))
}

fn teleport_event(record: &TeleportRecord) -> TeleportInitialized {
    TeleportInitialized {
        source_domain: record.source_domain,
        target_domain: record.target_domain,
        receiver: record.receiver,
        operator: record.operator,
        amount: record.amount,
        nonce: record.nonce,
        timestamp: record.timestamp,
    }
}
