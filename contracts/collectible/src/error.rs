use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Token {token_id} not found")]
    TokenNotFound { token_id: String },

    #[error("Token {token_id} already exists")]
    TokenAlreadyExists { token_id: String },
}
