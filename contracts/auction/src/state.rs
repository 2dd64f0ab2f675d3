use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::msg::{AuctionStatus, BidAsset};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuctionState {
    pub seller: Addr,
    pub starting_price: Uint128,
    pub duration: u64,
    /// Set when the auction is started: block time + duration
    pub end_time: Option<u64>,
    pub collection: Addr,
    pub token_id: String,
    pub price_oracle: Addr,
    pub bid_denom: String,
    pub status: AuctionStatus,
    /// Normalized value of the best bid at the time it was accepted.
    /// Non-decreasing while the auction is active.
    pub highest_bid: Uint128,
    pub highest_bidder: Option<Addr>,
    /// Asset and raw amount actually held for the best bid; this is what
    /// gets refunded on displacement and paid out at settlement.
    pub highest_bid_asset: Option<BidAsset>,
    pub highest_bid_amount: Uint128,
    /// Set once through the v2 re-initialization hook
    pub display_name: Option<String>,
}

pub const AUCTION: Item<AuctionState> = Item::new("auction");
