#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ContractInfoResponse, ExecuteMsg, InstantiateMsg, NumTokensResponse, OwnerOfResponse, QueryMsg,
};
use crate::state::{ContractInfo, Token, CONTRACT_INFO, TOKENS, TOKEN_COUNT};

const CONTRACT_NAME: &str = "crates.io:collectible";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONTRACT_INFO.save(deps.storage, &ContractInfo {
        name: msg.name.clone(),
        symbol: msg.symbol,
    })?;
    TOKEN_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("name", msg.name))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { token_id, owner } => execute_mint(deps, info, token_id, owner),
        ExecuteMsg::Approve { spender, token_id } => {
            execute_approve(deps, info, spender, token_id)
        }
        ExecuteMsg::Revoke { token_id } => execute_revoke(deps, info, token_id),
        ExecuteMsg::TransferFrom {
            recipient,
            token_id,
        } => execute_transfer_from(deps, info, recipient, token_id),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    if TOKENS.has(deps.storage, &token_id) {
        return Err(ContractError::TokenAlreadyExists { token_id });
    }

    let owner = match owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    TOKENS.save(deps.storage, &token_id, &Token {
        owner: owner.clone(),
        approved: None,
    })?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("token_id", token_id)
        .add_attribute("owner", owner))
}

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;

    if info.sender != token.owner {
        return Err(ContractError::Unauthorized {});
    }

    let spender = deps.api.addr_validate(&spender)?;
    token.approved = Some(spender.clone());
    TOKENS.save(deps.storage, &token_id, &token)?;

    Ok(Response::new()
        .add_attribute("method", "approve")
        .add_attribute("token_id", token_id)
        .add_attribute("spender", spender))
}

pub fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;

    if info.sender != token.owner {
        return Err(ContractError::Unauthorized {});
    }

    token.approved = None;
    TOKENS.save(deps.storage, &token_id, &token)?;

    Ok(Response::new()
        .add_attribute("method", "revoke")
        .add_attribute("token_id", token_id))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), &token_id)?;

    let authorized =
        info.sender == token.owner || token.approved.as_ref() == Some(&info.sender);
    if !authorized {
        return Err(ContractError::Unauthorized {});
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    token.owner = recipient.clone();
    token.approved = None;
    TOKENS.save(deps.storage, &token_id, &token)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", recipient))
}

fn load_token(deps: Deps, token_id: &str) -> Result<Token, ContractError> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| ContractError::TokenNotFound {
            token_id: token_id.to_string(),
        })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { token_id } => {
            let token = TOKENS.load(deps.storage, &token_id)?;
            to_binary(&OwnerOfResponse {
                owner: token.owner,
                approved: token.approved,
            })
        }
        QueryMsg::NumTokens {} => to_binary(&NumTokensResponse {
            count: TOKEN_COUNT.load(deps.storage)?,
        }),
        QueryMsg::ContractInfo {} => {
            let contract_info = CONTRACT_INFO.load(deps.storage)?;
            to_binary(&ContractInfoResponse {
                name: contract_info.name,
                symbol: contract_info.symbol,
            })
        }
    }
}
