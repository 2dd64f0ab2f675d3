use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Token contract address -> price feed contract address. The native
/// reference asset has no entry; it is priced 1:1 by definition.
pub const FEEDS: Map<&Addr, Addr> = Map::new("feeds");
