use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint256,
};
use cw2::set_contract_version;

use common::messaging::message_hash;
use common::L1HandlerMsg;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MessageCountResponse, NonceResponse, QueryMsg, SequencerResponse,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, L1_TO_L2_NONCE, L2_TO_L1_MESSAGES, SEQUENCER};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let sequencer = deps.api.addr_validate(&msg.sequencer)?;
    SEQUENCER.save(deps.storage, &sequencer)?;
    L1_TO_L2_NONCE.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("sequencer", sequencer))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessageToL1 {
            to_address,
            payload,
        } => execute_send_message_to_l1(deps, info, to_address, payload),
        ExecuteMsg::ConsumeMessageFromL2 {
            from_address,
            to_address,
            payload,
        } => execute_consume_message_from_l2(deps, info, from_address, to_address, payload),
        ExecuteMsg::SendMessageToL2 {
            from_address,
            to_address,
            msg,
        } => execute_send_message_to_l2(deps, info, from_address, to_address, msg),
    }
}

fn execute_send_message_to_l1(
    deps: DepsMut,
    info: MessageInfo,
    to_address: Uint256,
    payload: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let hash = message_hash(info.sender.as_str(), to_address, &payload);
    let count = L2_TO_L1_MESSAGES
        .may_load(deps.storage, hash.as_slice())?
        .unwrap_or(0)
        + 1;
    L2_TO_L1_MESSAGES.save(deps.storage, hash.as_slice(), &count)?;

    Ok(Response::new()
        .add_attribute("method", "send_message_to_l1")
        .add_attribute("from_address", info.sender)
        .add_attribute("to_address", to_address.to_string())
        .add_attribute("payload_len", payload.len().to_string())
        .add_attribute("message_hash", format!("0x{}", hex::encode(hash))))
}

fn ensure_sequencer(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if SEQUENCER.load(storage)? != *sender {
        return Err(ContractError::NotSequencer);
    }
    Ok(())
}

fn execute_consume_message_from_l2(
    deps: DepsMut,
    info: MessageInfo,
    from_address: String,
    to_address: Uint256,
    payload: Vec<Uint256>,
) -> Result<Response, ContractError> {
    ensure_sequencer(deps.storage, &info.sender)?;

    let hash = message_hash(&from_address, to_address, &payload);
    let count = L2_TO_L1_MESSAGES
        .may_load(deps.storage, hash.as_slice())?
        .unwrap_or(0);
    if count == 0 {
        return Err(ContractError::MessageNotFound);
    }

    if count == 1 {
        L2_TO_L1_MESSAGES.remove(deps.storage, hash.as_slice());
    } else {
        L2_TO_L1_MESSAGES.save(deps.storage, hash.as_slice(), &(count - 1))?;
    }

    Ok(Response::new()
        .add_attribute("method", "consume_message_from_l2")
        .add_attribute("from_address", from_address)
        .add_attribute("message_hash", format!("0x{}", hex::encode(hash)))
        .add_attribute("remaining", (count - 1).to_string()))
}

fn execute_send_message_to_l2(
    deps: DepsMut,
    info: MessageInfo,
    from_address: Uint256,
    to_address: String,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_sequencer(deps.storage, &info.sender)?;
    let target = deps.api.addr_validate(&to_address)?;

    let nonce = L1_TO_L2_NONCE.load(deps.storage)?;
    L1_TO_L2_NONCE.save(deps.storage, &(nonce + 1))?;

    let delivery = L1HandlerMsg { from_address, msg }.into_cosmos_msg(&target)?;

    Ok(Response::new()
        .add_message(delivery)
        .add_attribute("method", "send_message_to_l2")
        .add_attribute("from_address", from_address.to_string())
        .add_attribute("to_address", target)
        .add_attribute("nonce", nonce.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::MessageCount {
            from_address,
            to_address,
            payload,
        } => to_json_binary(&query_message_count(
            deps,
            from_address,
            to_address,
            payload,
        )?),
        QueryMsg::L1ToL2Nonce {} => to_json_binary(&NonceResponse {
            nonce: L1_TO_L2_NONCE.load(deps.storage)?,
        }),
        QueryMsg::Sequencer {} => to_json_binary(&SequencerResponse {
            sequencer: SEQUENCER.load(deps.storage)?.to_string(),
        }),
    }
}

fn query_message_count(
    deps: Deps,
    from_address: String,
    to_address: Uint256,
    payload: Vec<Uint256>,
) -> StdResult<MessageCountResponse> {
    let hash = message_hash(&from_address, to_address, &payload);
    let count = L2_TO_L1_MESSAGES
        .may_load(deps.storage, hash.as_slice())?
        .unwrap_or(0);
    Ok(MessageCountResponse { count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, CosmosMsg, WasmMsg};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                sequencer: "sequencer".to_string(),
            },
        )
        .unwrap();
    }

    fn payload() -> Vec<Uint256> {
        vec![Uint256::zero(), Uint256::from(42u8), Uint256::from(10u8), Uint256::zero()]
    }

    fn count(deps: Deps, from: &str) -> u64 {
        let res = query(
            deps,
            mock_env(),
            QueryMsg::MessageCount {
                from_address: from.to_string(),
                to_address: Uint256::one(),
                payload: payload(),
            },
        )
        .unwrap();
        from_json::<MessageCountResponse>(&res).unwrap().count
    }

    #[test]
    fn test_send_then_consume_once_per_copy() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let send = ExecuteMsg::SendMessageToL1 {
            to_address: Uint256::one(),
            payload: payload(),
        };
        let consume = ExecuteMsg::ConsumeMessageFromL2 {
            from_address: "bridge".to_string(),
            to_address: Uint256::one(),
            payload: payload(),
        };

        for _ in 0..2 {
            execute(deps.as_mut(), mock_env(), mock_info("bridge", &[]), send.clone()).unwrap();
        }
        assert_eq!(count(deps.as_ref(), "bridge"), 2);
        assert_eq!(count(deps.as_ref(), "gateway"), 0);

        for _ in 0..2 {
            execute(
                deps.as_mut(),
                mock_env(),
                mock_info("sequencer", &[]),
                consume.clone(),
            )
            .unwrap();
        }
        assert_eq!(count(deps.as_ref(), "bridge"), 0);

        let err = execute(deps.as_mut(), mock_env(), mock_info("sequencer", &[]), consume)
            .unwrap_err();
        assert_eq!(err, ContractError::MessageNotFound);
    }

    #[test]
    fn test_consume_requires_sequencer() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &[]),
            ExecuteMsg::SendMessageToL1 {
                to_address: Uint256::one(),
                payload: payload(),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &[]),
            ExecuteMsg::ConsumeMessageFromL2 {
                from_address: "bridge".to_string(),
                to_address: Uint256::one(),
                payload: payload(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NotSequencer);
        assert_eq!(count(deps.as_ref(), "bridge"), 1);
    }

    #[test]
    fn test_send_to_l2_stamps_nonce_and_delivers() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let msg = Binary::from(b"{\"ping\":{}}".to_vec());
        for expected_nonce in 0..2u64 {
            let res = execute(
                deps.as_mut(),
                mock_env(),
                mock_info("sequencer", &[]),
                ExecuteMsg::SendMessageToL2 {
                    from_address: Uint256::from(7u8),
                    to_address: "target".to_string(),
                    msg: msg.clone(),
                },
            )
            .unwrap();

            assert!(res
                .attributes
                .iter()
                .any(|a| a.key == "nonce" && a.value == expected_nonce.to_string()));
            assert_eq!(res.messages.len(), 1);
            match &res.messages[0].msg {
                CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                    assert_eq!(contract_addr, "target")
                }
                other => panic!("unexpected message: {:?}", other),
            }
        }

        let res = query(deps.as_ref(), mock_env(), QueryMsg::L1ToL2Nonce {}).unwrap();
        assert_eq!(from_json::<NonceResponse>(&res).unwrap().nonce, 2);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("intruder", &[]),
            ExecuteMsg::SendMessageToL2 {
                from_address: Uint256::from(7u8),
                to_address: "target".to_string(),
                msg,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NotSequencer);
    }
}
