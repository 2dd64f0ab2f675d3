#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, LatestPriceResponse, QueryMsg};
use crate::state::{FeedState, FEED};

const CONTRACT_NAME: &str = "crates.io:mock_price_feed";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let feed = FeedState {
        owner: info.sender.clone(),
        decimals: msg.decimals,
        description: msg.description.clone(),
        price: msg.initial_price,
        updated_at: env.block.time.seconds(),
    };
    FEED.save(deps.storage, &feed)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("description", msg.description)
        .add_attribute("price", msg.initial_price))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetPrice { price } => execute_set_price(deps, env, info, price),
    }
}

pub fn execute_set_price(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    let mut feed = FEED.load(deps.storage)?;

    if info.sender != feed.owner {
        return Err(ContractError::Unauthorized {});
    }

    feed.price = price;
    feed.updated_at = env.block.time.seconds();
    FEED.save(deps.storage, &feed)?;

    Ok(Response::new()
        .add_attribute("method", "set_price")
        .add_attribute("price", price))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LatestPrice {} => {
            let feed = FEED.load(deps.storage)?;
            to_binary(&LatestPriceResponse {
                price: feed.price,
                decimals: feed.decimals,
                updated_at: feed.updated_at,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_binary;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    fn setup(deps: DepsMut) {
        let msg = InstantiateMsg {
            decimals: 4,
            description: "MMO/REF".to_string(),
            initial_price: Uint128::new(15_000),
        };
        instantiate(deps, mock_env(), mock_info("admin", &[]), msg).unwrap();
    }

    #[test]
    fn reports_latest_price() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let res = query(deps.as_ref(), mock_env(), QueryMsg::LatestPrice {}).unwrap();
        let latest: LatestPriceResponse = from_binary(&res).unwrap();
        assert_eq!(latest.price, Uint128::new(15_000));
        assert_eq!(latest.decimals, 4);
    }

    #[test]
    fn set_price_requires_owner() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("intruder", &[]),
            ExecuteMsg::SetPrice {
                price: Uint128::new(1),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetPrice {
                price: Uint128::new(20_000),
            },
        )
        .unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::LatestPrice {}).unwrap();
        let latest: LatestPriceResponse = from_binary(&res).unwrap();
        assert_eq!(latest.price, Uint128::new(20_000));
    }
}
