use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub price_oracle: String,
    /// Native denom auctions accept for reference-asset bids
    pub bid_denom: String,
    pub implementation: ImplementationSource,
}

/// Where the code for the next created auction comes from
#[cw_serde]
pub enum ImplementationSource {
    /// Fixed code id; only auctions created after a change pick a new one up
    Direct { code_id: u64 },
    /// Beacon mode; the coordinator's pointer governs existing and future auctions
    Coordinated { coordinator: String },
}

/// Validated form stored in config and returned from queries
#[cw_serde]
pub enum Implementation {
    Direct { code_id: u64 },
    Coordinated { coordinator: Addr },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new auction for a collectible; the caller becomes the seller.
    /// The auction is created in its initial state; the seller starts it
    /// separately after approving the item transfer.
    CreateAuction {
        starting_price: Uint128,
        duration: u64,
        collection: String,
        token_id: String,
    },
    /// Change the implementation source used for future auctions (owner only)
    SetImplementation { implementation: ImplementationSource },
    /// Update owner
    UpdateOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get factory config
    #[returns(ConfigResponse)]
    Config {},
    /// Look up an auction by identifier
    #[returns(AuctionResponse)]
    Auction { auction_id: u64 },
    /// Number of auctions ever created
    #[returns(AuctionCountResponse)]
    AuctionCount {},
    /// List created auctions
    #[returns(AuctionListResponse)]
    AuctionList {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Display name set by the one-time migration step, if it has run
    #[returns(NameResponse)]
    Name {},
}

#[cw_serde]
pub struct MigrateMsg {
    pub name: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub price_oracle: Addr,
    pub bid_denom: String,
    pub implementation: Implementation,
}

#[cw_serde]
pub struct AuctionResponse {
    pub auction_id: u64,
    pub address: Addr,
    pub seller: Addr,
    pub created_at: u64,
}

#[cw_serde]
pub struct AuctionCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct AuctionListResponse {
    pub auctions: Vec<AuctionResponse>,
}

#[cw_serde]
pub struct NameResponse {
    pub name: Option<String>,
}
