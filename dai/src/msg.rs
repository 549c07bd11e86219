//! Message types for the DAI token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

pub use common::WardResponse;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial ward (may mint, rely and deny)
    pub ward: String,
}

/// Every `amount` is a `Uint256`. A value of 2^256 or more fails to parse
/// before any handler runs, which is how out-of-range amounts are rejected.
#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from the caller to `recipient`
    Transfer { recipient: String, amount: Uint256 },

    /// Move `amount` from `sender` to `recipient` using the caller's allowance
    TransferFrom {
        sender: String,
        recipient: String,
        amount: Uint256,
    },

    /// Set the caller's allowance for `spender` (overwrites)
    Approve { spender: String, amount: Uint256 },

    IncreaseAllowance { spender: String, amount: Uint256 },

    DecreaseAllowance { spender: String, amount: Uint256 },

    /// Create `amount` for `account`
    ///
    /// Authorization: Ward only
    Mint { account: String, amount: Uint256 },

    /// Destroy `amount` from `account`
    ///
    /// Authorization: `account` itself, or a spender with enough allowance
    Burn { account: String, amount: Uint256 },

    /// Authorization: Ward only
    Rely { usr: String },

    /// Authorization: Ward only
    Deny { usr: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    BalanceOf { account: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Token metadata
    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(WardResponse)]
    Wards { user: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint256,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint256,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint256,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
