//! Token interface used by the bridges.
//!
//! Only the ward/allowance-gated supply operations are listed here; the
//! serialization matches the `dai` contract's `ExecuteMsg` variants.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, CosmosMsg, StdResult, Uint256, WasmMsg};

#[cw_serde]
pub enum TokenExecuteMsg {
    /// Mint `amount` to `account` (caller must be a ward of the token)
    Mint { account: String, amount: Uint256 },
    /// Burn `amount` from `account` (self-burn or allowance of the caller)
    Burn { account: String, amount: Uint256 },
}

impl TokenExecuteMsg {
    pub fn into_cosmos_msg(self, token: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}
