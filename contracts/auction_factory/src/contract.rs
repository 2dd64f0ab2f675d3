#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply, ReplyOn, Response, StdError,
    StdResult, SubMsg, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::parse_reply_instantiate_data;

use upgrade_coordinator::msg::{
    CurrentCodeIdResponse, ExecuteMsg as CoordinatorExecuteMsg, QueryMsg as CoordinatorQueryMsg,
};

use crate::error::ContractError;
use crate::msg::{
    AuctionCountResponse, AuctionListResponse, AuctionResponse, ConfigResponse, ExecuteMsg,
    Implementation, ImplementationSource, InstantiateMsg, MigrateMsg, NameResponse, QueryMsg,
};
use crate::state::{AuctionEntry, Config, PendingAuction, AUCTIONS, AUCTION_COUNT, CONFIG, NAME, PENDING};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:auction_factory";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Reply IDs
const INSTANTIATE_AUCTION_REPLY_ID: u64 = 1;

const MIN_AUCTION_DURATION: u64 = 24 * 60 * 60;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;
    let price_oracle = deps.api.addr_validate(&msg.price_oracle)?;
    let implementation = validate_implementation(deps.as_ref(), msg.implementation)?;

    let config = Config {
        owner: owner.clone(),
        price_oracle,
        bid_denom: msg.bid_denom,
        implementation,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    AUCTION_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateAuction {
            starting_price,
            duration,
            collection,
            token_id,
        } => execute_create_auction(deps, env, info, starting_price, duration, collection, token_id),
        ExecuteMsg::SetImplementation { implementation } => {
            execute_set_implementation(deps, info, implementation)
        }
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

pub fn execute_create_auction(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    starting_price: Uint128,
    duration: u64,
    collection: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate before anything is instantiated, so a failed creation leaves
    // no dangling auction.
    if starting_price.is_zero() {
        return Err(ContractError::InvalidStartingPrice {});
    }
    if duration < MIN_AUCTION_DURATION {
        return Err(ContractError::InvalidDuration {});
    }
    let collection = deps.api.addr_validate(&collection)?;

    let auction_id = AUCTION_COUNT.load(deps.storage)? + 1;
    AUCTION_COUNT.save(deps.storage, &auction_id)?;

    // Direct mode pins the code id and leaves the instance without a wasm
    // admin, so it can never change implementation. Coordinated mode reads
    // the beacon's current pointer and makes the coordinator the admin so
    // it can migrate the instance later.
    let (code_id, admin) = match &config.implementation {
        Implementation::Direct { code_id } => (*code_id, None),
        Implementation::Coordinated { coordinator } => {
            let current: CurrentCodeIdResponse = deps
                .querier
                .query_wasm_smart(coordinator.clone(), &CoordinatorQueryMsg::CurrentCodeId {})?;
            (current.code_id, Some(coordinator.to_string()))
        }
    };

    let instantiate_msg = auction::msg::InstantiateMsg {
        seller: info.sender.to_string(),
        starting_price,
        duration,
        collection: collection.to_string(),
        token_id,
        price_oracle: config.price_oracle.to_string(),
        bid_denom: config.bid_denom,
    };

    let wasm_msg = WasmMsg::Instantiate {
        admin,
        code_id,
        msg: to_binary(&instantiate_msg)?,
        funds: vec![],
        label: format!("auction_{}", auction_id),
    };

    let sub_msg = SubMsg {
        id: INSTANTIATE_AUCTION_REPLY_ID,
        msg: wasm_msg.into(),
        gas_limit: None,
        reply_on: ReplyOn::Success,
    };

    PENDING.save(deps.storage, &PendingAuction {
        auction_id,
        seller: info.sender.clone(),
    })?;

    Ok(Response::new()
        .add_submessage(sub_msg)
        .add_attribute("method", "create_auction")
        .add_attribute("auction_id", auction_id.to_string())
        .add_attribute("seller", info.sender))
}

pub fn execute_set_implementation(
    deps: DepsMut,
    info: MessageInfo,
    implementation: ImplementationSource,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.implementation = validate_implementation(deps.as_ref(), implementation)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_implementation")
        .add_attribute("implementation", format!("{:?}", config.implementation)))
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

fn validate_implementation(
    deps: Deps,
    implementation: ImplementationSource,
) -> Result<Implementation, ContractError> {
    let implementation = match implementation {
        ImplementationSource::Direct { code_id } => Implementation::Direct { code_id },
        ImplementationSource::Coordinated { coordinator } => Implementation::Coordinated {
            coordinator: deps.api.addr_validate(&coordinator)?,
        },
    };
    Ok(implementation)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_AUCTION_REPLY_ID => handle_instantiate_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn handle_instantiate_reply(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let reply = parse_reply_instantiate_data(msg)?;
    let address = deps.api.addr_validate(&reply.contract_address)?;

    let pending = PENDING.load(deps.storage)?;
    PENDING.remove(deps.storage);

    AUCTIONS.save(deps.storage, pending.auction_id, &AuctionEntry {
        address: address.clone(),
        seller: pending.seller,
        created_at: env.block.time.seconds(),
    })?;

    let mut response = Response::new();

    // In beacon mode the coordinator has to know about the new instance so
    // future upgrades reach it.
    let config = CONFIG.load(deps.storage)?;
    if let Implementation::Coordinated { coordinator } = &config.implementation {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: coordinator.to_string(),
            msg: to_binary(&CoordinatorExecuteMsg::RegisterInstance {
                instance: address.to_string(),
                auction_id: pending.auction_id,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("method", "handle_instantiate_reply")
        .add_attribute("auction_id", pending.auction_id.to_string())
        .add_attribute("auction_address", address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Auction { auction_id } => to_binary(&query_auction(deps, auction_id)?),
        QueryMsg::AuctionCount {} => to_binary(&AuctionCountResponse {
            count: AUCTION_COUNT.load(deps.storage)?,
        }),
        QueryMsg::AuctionList { start_after, limit } => {
            to_binary(&query_auction_list(deps, start_after, limit)?)
        }
        QueryMsg::Name {} => to_binary(&NameResponse {
            name: NAME.may_load(deps.storage)?,
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        price_oracle: config.price_oracle,
        bid_denom: config.bid_denom,
        implementation: config.implementation,
    })
}

fn query_auction(deps: Deps, auction_id: u64) -> StdResult<AuctionResponse> {
    let entry = AUCTIONS
        .may_load(deps.storage, auction_id)?
        .ok_or_else(|| StdError::generic_err(format!("unknown auction id {}", auction_id)))?;
    Ok(AuctionResponse {
        auction_id,
        address: entry.address,
        seller: entry.seller,
        created_at: entry.created_at,
    })
}

fn query_auction_list(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AuctionListResponse> {
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let auctions: StdResult<Vec<_>> = AUCTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(auction_id, entry)| AuctionResponse {
                auction_id,
                address: entry.address,
                seller: entry.seller,
                created_at: entry.created_at,
            })
        })
        .collect();

    Ok(AuctionListResponse {
        auctions: auctions?,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Std(StdError::generic_err(
            "can only migrate from the auction factory contract",
        )));
    }

    // One-time step introduced by the v2 logic; a second invocation must fail
    if NAME.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyMigrated {});
    }
    NAME.save(deps.storage, &msg.name)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("name", msg.name))
}
