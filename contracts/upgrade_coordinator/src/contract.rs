#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, CurrentCodeIdResponse, ExecuteMsg, InstanceInfo, InstanceListResponse,
    InstantiateMsg, QueryMsg,
};
use crate::state::{Config, CONFIG, INSTANCES};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:upgrade_coordinator";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &Config {
        owner: owner.clone(),
        code_id: msg.code_id,
        factory: None,
    })?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("code_id", msg.code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetFactory { factory } => execute_set_factory(deps, info, factory),
        ExecuteMsg::RegisterInstance {
            instance,
            auction_id,
        } => execute_register_instance(deps, info, instance, auction_id),
        ExecuteMsg::UpgradeTo { code_id } => execute_upgrade_to(deps, info, code_id),
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

pub fn execute_set_factory(
    deps: DepsMut,
    info: MessageInfo,
    factory: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let factory = deps.api.addr_validate(&factory)?;
    config.factory = Some(factory.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_factory")
        .add_attribute("factory", factory))
}

pub fn execute_register_instance(
    deps: DepsMut,
    info: MessageInfo,
    instance: String,
    auction_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let factory = config.factory.ok_or(ContractError::FactoryNotSet {})?;
    if info.sender != factory {
        return Err(ContractError::Unauthorized {});
    }

    let instance = deps.api.addr_validate(&instance)?;
    INSTANCES.save(deps.storage, &instance, &auction_id)?;

    Ok(Response::new()
        .add_attribute("method", "register_instance")
        .add_attribute("instance", instance)
        .add_attribute("auction_id", auction_id.to_string()))
}

pub fn execute_upgrade_to(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.code_id = code_id;
    CONFIG.save(deps.storage, &config)?;

    // Flip every registered instance to the new logic in this same
    // transaction; each keeps its own stored state.
    let instances: Vec<_> = INSTANCES
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    let mut messages: Vec<CosmosMsg> = vec![];
    for (address, _) in &instances {
        messages.push(CosmosMsg::Wasm(WasmMsg::Migrate {
            contract_addr: address.to_string(),
            new_code_id: code_id,
            msg: to_binary(&Empty {})?,
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "upgrade_to")
        .add_attribute("code_id", code_id.to_string())
        .add_attribute("migrated", instances.len().to_string()))
}

pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let new_owner = deps.api.addr_validate(&new_owner)?;
    config.owner = new_owner.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_attribute("new_owner", new_owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CurrentCodeId {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&CurrentCodeIdResponse {
                code_id: config.code_id,
            })
        }
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&ConfigResponse {
                owner: config.owner,
                code_id: config.code_id,
                factory: config.factory,
            })
        }
        QueryMsg::Instances { start_after, limit } => {
            to_binary(&query_instances(deps, start_after, limit)?)
        }
    }
}

fn query_instances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<InstanceListResponse> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let instances: StdResult<Vec<_>> = INSTANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(address, auction_id)| InstanceInfo {
                address,
                auction_id,
            })
        })
        .collect();

    Ok(InstanceListResponse {
        instances: instances?,
    })
}
