use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    /// The single logic pointer every coordinated instance resolves through
    pub code_id: u64,
    pub factory: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Instance address -> auction id, for the migrate fan-out on upgrade
pub const INSTANCES: Map<&Addr, u64> = Map::new("instances");
