use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use price_oracle::msg::Asset;

#[cw_serde]
pub struct InstantiateMsg {
    pub seller: String,
    /// Minimum normalized value accepted as a first bid; validated > 0 by the factory
    pub starting_price: Uint128,
    /// Auction length in seconds; validated >= one day by the factory
    pub duration: u64,
    pub collection: String,
    pub token_id: String,
    pub price_oracle: String,
    /// Native denom used for reference-asset bids
    pub bid_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Take custody of the item and open bidding (seller only)
    Start {},
    /// Place a bid in the reference denom or a cw20 token. Reference-asset
    /// bids must attach exactly `amount` of the bid denom; token bids must
    /// have approved the auction to pull `amount` beforehand.
    Bid { asset: Asset, amount: Uint128 },
    /// Close the auction and settle (seller only; early close allowed)
    EndAuction {},
    /// One-time hook introduced by the v2 logic: set the display name (seller only)
    SetDisplayName { name: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full auction state
    #[returns(InfoResponse)]
    Info {},
    #[returns(DisplayNameResponse)]
    DisplayName {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum AuctionStatus {
    Created,
    Active,
    Ended,
}

/// Asset of the currently held highest bid, with a validated address
#[cw_serde]
pub enum BidAsset {
    Native {},
    Token { address: Addr },
}

#[cw_serde]
pub struct InfoResponse {
    pub seller: Addr,
    pub starting_price: Uint128,
    pub duration: u64,
    pub end_time: Option<u64>,
    pub collection: Addr,
    pub token_id: String,
    pub price_oracle: Addr,
    pub bid_denom: String,
    pub status: AuctionStatus,
    pub highest_bid: Uint128,
    pub highest_bidder: Option<Addr>,
    pub highest_bid_asset: Option<BidAsset>,
    pub highest_bid_amount: Uint128,
    pub display_name: Option<String>,
}

#[cw_serde]
pub struct DisplayNameResponse {
    pub name: Option<String>,
}
