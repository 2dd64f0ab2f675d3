use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Identity of a biddable asset. The native denom is the reference asset and
/// always normalizes 1:1; every other asset is a cw20 token keyed by its
/// contract address.
#[cw_serde]
pub enum Asset {
    Native {},
    Token { address: String },
}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Associate a price feed with a token (owner only, overwrites any prior feed)
    RegisterFeed { asset: Asset, feed: String },
    /// Update owner
    UpdateOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Convert a raw asset amount into reference units at the feed's current price.
    /// Re-reads the feed on every call; nothing is cached.
    #[returns(NormalizedValueResponse)]
    Normalize { asset: Asset, amount: Uint128 },
    /// Get the feed registered for a token
    #[returns(FeedResponse)]
    Feed { asset: Asset },
    /// Get gateway config
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct NormalizedValueResponse {
    pub value: Uint128,
}

#[cw_serde]
pub struct FeedResponse {
    pub feed: Option<Addr>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
}

/// Query interface every registered price feed must answer
#[cw_serde]
#[derive(QueryResponses)]
pub enum FeedQueryMsg {
    #[returns(LatestPriceResponse)]
    LatestPrice {},
}

#[cw_serde]
pub struct LatestPriceResponse {
    /// Reference units per whole token, scaled by 10^decimals
    pub price: Uint128,
    pub decimals: u8,
    pub updated_at: u64,
}
