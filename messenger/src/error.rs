use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("messenger/not-sequencer")]
    NotSequencer,

    #[error("messenger/message-not-found")]
    MessageNotFound,
}
