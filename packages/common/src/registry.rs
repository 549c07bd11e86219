//! Address registry interface.
//!
//! The registry lets an account bind its own L1 address. The direct bridge
//! consults it on forced withdrawals.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    /// L1 address bound by `account`, if any
    #[returns(LookupResponse)]
    Lookup { account: String },
}

#[cw_serde]
pub struct LookupResponse {
    pub l1_address: Option<Uint256>,
}
