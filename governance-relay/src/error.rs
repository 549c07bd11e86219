use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("l2_governance_relay/not-authorized")]
    NotAuthorized,

    #[error("l2_governance_relay/not-messenger")]
    NotMessenger,

    #[error("l2_governance_relay/invalid-l1-origin")]
    InvalidL1Origin,

    #[error("l2_governance_relay/invalid-l1-address")]
    InvalidL1Address,
}
