#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128,
    Uint256,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    Asset, ConfigResponse, ExecuteMsg, FeedQueryMsg, FeedResponse, InstantiateMsg,
    LatestPriceResponse, NormalizedValueResponse, QueryMsg,
};
use crate::state::{Config, CONFIG, FEEDS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:price_oracle";
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
    })?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterFeed { asset, feed } => execute_register_feed(deps, info, asset, feed),
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

pub fn execute_register_feed(
    deps: DepsMut,
    info: MessageInfo,
    asset: Asset,
    feed: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let token = match asset {
        Asset::Native {} => return Err(ContractError::InvalidAsset {}),
        Asset::Token { address } => deps.api.addr_validate(&address)?,
    };
    let feed = deps.api.addr_validate(&feed)?;

    // Overwrites any prior association; feed liveness is not checked here
    FEEDS.save(deps.storage, &token, &feed)?;

    Ok(Response::new()
        .add_attribute("method", "register_feed")
        .add_attribute("asset", token)
        .add_attribute("feed", feed))
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
        QueryMsg::Normalize { asset, amount } => to_binary(&query_normalize(deps, asset, amount)?),
        QueryMsg::Feed { asset } => to_binary(&query_feed(deps, asset)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
    }
}

fn query_normalize(deps: Deps, asset: Asset, amount: Uint128) -> StdResult<NormalizedValueResponse> {
    let value = match asset {
        Asset::Native {} => amount,
        Asset::Token { address } => {
            let token = deps.api.addr_validate(&address)?;
            let feed = FEEDS.may_load(deps.storage, &token)?.ok_or_else(|| {
                StdError::generic_err(format!("no feed registered for asset {}", token))
            })?;

            let latest: LatestPriceResponse = deps
                .querier
                .query_wasm_smart(feed, &FeedQueryMsg::LatestPrice {})?;

            normalize_amount(amount, &latest)?
        }
    };

    Ok(NormalizedValueResponse { value })
}

/// amount * price / 10^decimals with a 256-bit intermediate, so large raw
/// amounts cannot overflow before the division.
fn normalize_amount(amount: Uint128, latest: &LatestPriceResponse) -> StdResult<Uint128> {
    let scale = 10u128
        .checked_pow(latest.decimals as u32)
        .ok_or_else(|| StdError::generic_err("feed decimal scale out of range"))?;

    let product = amount.full_mul(latest.price);
    let value = product
        .checked_div(Uint256::from(scale))
        .map_err(|_| StdError::generic_err("feed decimal scale out of range"))?;

    Uint128::try_from(value)
        .map_err(|_| StdError::generic_err("normalized value exceeds 128 bits"))
}

fn query_feed(deps: Deps, asset: Asset) -> StdResult<FeedResponse> {
    let feed = match asset {
        Asset::Native {} => None,
        Asset::Token { address } => {
            let token = deps.api.addr_validate(&address)?;
            FEEDS.may_load(deps.storage, &token)?
        }
    };
    Ok(FeedResponse { feed })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
    })
}
