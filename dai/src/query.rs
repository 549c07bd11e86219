//! Query handlers for the DAI token contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{AllowanceResponse, BalanceResponse, TokenInfoResponse, TotalSupplyResponse};
use crate::state::{ALLOWANCES, BALANCES, DECIMALS, NAME, SYMBOL, TOTAL_SUPPLY};

pub fn query_balance_of(deps: Deps, account: String) -> StdResult<BalanceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let balance = BALANCES.may_load(deps.storage, &account)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    Ok(TotalSupplyResponse {
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

pub fn query_token_info() -> TokenInfoResponse {
    TokenInfoResponse {
        name: NAME.to_string(),
        symbol: SYMBOL.to_string(),
        decimals: DECIMALS,
    }
}
