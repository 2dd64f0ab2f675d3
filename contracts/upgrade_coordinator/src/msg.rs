use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Logic version every coordinated auction starts from
    pub code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Set the factory allowed to register instances (owner only)
    SetFactory { factory: String },
    /// Record an auction created through this coordinator (factory only)
    RegisterInstance { instance: String, auction_id: u64 },
    /// Point the beacon at new logic and migrate every registered instance
    /// in the same transaction (owner only)
    UpgradeTo { code_id: u64 },
    /// Update owner
    UpdateOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Code id the next coordinated auction will be created from
    #[returns(CurrentCodeIdResponse)]
    CurrentCodeId {},
    /// Get coordinator config
    #[returns(ConfigResponse)]
    Config {},
    /// List registered instances
    #[returns(InstanceListResponse)]
    Instances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct CurrentCodeIdResponse {
    pub code_id: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub code_id: u64,
    pub factory: Option<Addr>,
}

#[cw_serde]
pub struct InstanceListResponse {
    pub instances: Vec<InstanceInfo>,
}

#[cw_serde]
pub struct InstanceInfo {
    pub address: Addr,
    pub auction_id: u64,
}
