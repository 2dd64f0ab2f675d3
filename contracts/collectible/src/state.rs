use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContractInfo {
    pub name: String,
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Token {
    pub owner: Addr,
    pub approved: Option<Addr>,
}

pub const CONTRACT_INFO: Item<ContractInfo> = Item::new("contract_info");
pub const TOKENS: Map<&str, Token> = Map::new("tokens");
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");
