use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::msg::Implementation;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub price_oracle: Addr,
    pub bid_denom: String,
    pub implementation: Implementation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuctionEntry {
    pub address: Addr,
    pub seller: Addr,
    pub created_at: u64,
}

/// Bridges the instantiate submessage to its reply
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PendingAuction {
    pub auction_id: u64,
    pub seller: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Monotonic, 1-based; identifiers are never reused
pub const AUCTION_COUNT: Item<u64> = Item::new("auction_count");
pub const AUCTIONS: Map<u64, AuctionEntry> = Map::new("auctions");
pub const PENDING: Item<PendingAuction> = Item::new("pending_auction");
/// Set once by the v2 migration step
pub const NAME: Item<String> = Item::new("name");
