use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("startingPrice must be greater than 0")]
    InvalidStartingPrice {},

    #[error("Duration must be at least 1 day")]
    InvalidDuration {},

    #[error("Migration step already executed")]
    AlreadyMigrated {},

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
