use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

// A feed answers the gateway's wire interface
pub use price_oracle::msg::{FeedQueryMsg as QueryMsg, LatestPriceResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub decimals: u8,
    pub description: String,
    pub initial_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Set the latest answer (owner only); stamps the block time
    SetPrice { price: Uint128 },
}
