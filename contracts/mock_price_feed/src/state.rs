use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FeedState {
    pub owner: Addr,
    pub decimals: u8,
    pub description: String,
    pub price: Uint128,
    pub updated_at: u64,
}

pub const FEED: Item<FeedState> = Item::new("feed");
