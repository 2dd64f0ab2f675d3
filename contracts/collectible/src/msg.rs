use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new token; the owner defaults to the sender
    Mint {
        token_id: String,
        owner: Option<String>,
    },
    /// Grant a single spender transfer rights over a token (owner only)
    Approve { spender: String, token_id: String },
    /// Clear the approval on a token (owner only)
    Revoke { token_id: String },
    /// Move a token; the sender must be the owner or the approved spender.
    /// Transferring clears the approval.
    TransferFrom {
        recipient: String,
        token_id: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: String },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
    pub approved: Option<Addr>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}
