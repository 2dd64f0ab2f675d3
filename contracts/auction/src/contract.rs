#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::Cw20ExecuteMsg;
use cw_utils::{must_pay, nonpayable};

use price_oracle::msg::{Asset, NormalizedValueResponse, QueryMsg as OracleQueryMsg};

use crate::error::ContractError;
use crate::msg::{
    AuctionStatus, BidAsset, DisplayNameResponse, ExecuteMsg, InfoResponse, InstantiateMsg,
    MigrateMsg, QueryMsg,
};
use crate::state::{AuctionState, AUCTION};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:auction";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let auction = AuctionState {
        seller: deps.api.addr_validate(&msg.seller)?,
        starting_price: msg.starting_price,
        duration: msg.duration,
        end_time: None,
        collection: deps.api.addr_validate(&msg.collection)?,
        token_id: msg.token_id,
        price_oracle: deps.api.addr_validate(&msg.price_oracle)?,
        bid_denom: msg.bid_denom,
        status: AuctionStatus::Created,
        highest_bid: Uint128::zero(),
        highest_bidder: None,
        highest_bid_asset: None,
        highest_bid_amount: Uint128::zero(),
        display_name: None,
    };
    AUCTION.save(deps.storage, &auction)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("seller", auction.seller)
        .add_attribute("starting_price", auction.starting_price)
        .add_attribute("token_id", auction.token_id))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Start {} => execute_start(deps, env, info),
        ExecuteMsg::Bid { asset, amount } => execute_bid(deps, env, info, asset, amount),
        ExecuteMsg::EndAuction {} => execute_end_auction(deps, env, info),
        ExecuteMsg::SetDisplayName { name } => execute_set_display_name(deps, info, name),
    }
}

pub fn execute_start(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut auction = AUCTION.load(deps.storage)?;

    if info.sender != auction.seller {
        return Err(ContractError::Unauthorized {});
    }
    if auction.status != AuctionStatus::Created {
        return Err(ContractError::AlreadyStarted {});
    }

    let end_time = env.block.time.seconds() + auction.duration;
    auction.end_time = Some(end_time);
    auction.status = AuctionStatus::Active;
    AUCTION.save(deps.storage, &auction)?;

    // Pull the item into custody; the seller must have approved us. A failed
    // transfer aborts the whole call, so the auction never opens without the item.
    let custody_msg = WasmMsg::Execute {
        contract_addr: auction.collection.to_string(),
        msg: to_binary(&collectible::msg::ExecuteMsg::TransferFrom {
            recipient: env.contract.address.to_string(),
            token_id: auction.token_id.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(custody_msg)
        .add_attribute("method", "start")
        .add_attribute("end_time", end_time.to_string()))
}

pub fn execute_bid(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: Asset,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut auction = AUCTION.load(deps.storage)?;

    if auction.status != AuctionStatus::Active {
        return Err(ContractError::AuctionNotActive {});
    }
    let end_time = auction.end_time.ok_or(ContractError::AuctionNotActive {})?;
    if env.block.time.seconds() >= end_time {
        return Err(ContractError::BiddingClosed {});
    }
    if info.sender == auction.seller {
        return Err(ContractError::SellerCannotBid {});
    }

    // Live oracle read on every bid; an unregistered asset fails the query
    // and with it the whole bid.
    let normalized: NormalizedValueResponse = deps.querier.query_wasm_smart(
        auction.price_oracle.clone(),
        &OracleQueryMsg::Normalize {
            asset: asset.clone(),
            amount,
        },
    )?;
    let normalized = normalized.value;

    if auction.highest_bidder.is_none() {
        if normalized < auction.starting_price {
            return Err(ContractError::BidTooLow {});
        }
    } else if normalized <= auction.highest_bid {
        // equal bids are rejected; the earlier bidder keeps the lead
        return Err(ContractError::BidTooLow {});
    }

    let bid_asset = match &asset {
        Asset::Native {} => {
            let paid = must_pay(&info, &auction.bid_denom)?;
            if paid != amount {
                return Err(ContractError::PaymentMismatch {});
            }
            BidAsset::Native {}
        }
        Asset::Token { address } => {
            nonpayable(&info)?;
            BidAsset::Token {
                address: deps.api.addr_validate(address)?,
            }
        }
    };

    let mut messages: Vec<CosmosMsg> = vec![];

    // Refund the displaced bidder their exact raw amount in their original
    // asset. The refund, the pull below, and the state update commit as one
    // transaction; if any piece fails, none of it happened.
    if let (Some(prev_bidder), Some(prev_asset)) =
        (&auction.highest_bidder, &auction.highest_bid_asset)
    {
        messages.push(transfer_funds_msg(
            prev_asset,
            auction.highest_bid_amount,
            prev_bidder,
            &auction.bid_denom,
        )?);
    }

    // Native funds arrived attached to this call; token bids are pulled
    if let BidAsset::Token { address } = &bid_asset {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            })?,
            funds: vec![],
        }));
    }

    auction.highest_bid = normalized;
    auction.highest_bidder = Some(info.sender.clone());
    auction.highest_bid_asset = Some(bid_asset);
    auction.highest_bid_amount = amount;
    AUCTION.save(deps.storage, &auction)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "bid")
        .add_attribute("bidder", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("normalized_value", normalized))
}

pub fn execute_end_auction(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut auction = AUCTION.load(deps.storage)?;

    if info.sender != auction.seller {
        return Err(ContractError::Unauthorized {});
    }
    if auction.status != AuctionStatus::Active {
        return Err(ContractError::AuctionNotActive {});
    }
    // The seller may close before end_time; the deadline only gates bids.

    let mut messages: Vec<CosmosMsg> = vec![];
    let winner = auction.highest_bidder.clone();

    match (&auction.highest_bidder, &auction.highest_bid_asset) {
        (Some(winner), Some(asset)) => {
            messages.push(item_transfer_msg(&auction, winner)?);
            messages.push(transfer_funds_msg(
                asset,
                auction.highest_bid_amount,
                &auction.seller,
                &auction.bid_denom,
            )?);
        }
        _ => {
            // no bids: the item goes back to the seller
            messages.push(item_transfer_msg(&auction, &auction.seller)?);
        }
    }

    auction.status = AuctionStatus::Ended;
    AUCTION.save(deps.storage, &auction)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "end_auction")
        .add_attribute("winner", winner.map_or_else(|| "none".to_string(), |w| w.to_string()))
        .add_attribute("winning_bid", auction.highest_bid))
}

pub fn execute_set_display_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let mut auction = AUCTION.load(deps.storage)?;

    if info.sender != auction.seller {
        return Err(ContractError::Unauthorized {});
    }
    if auction.display_name.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }

    auction.display_name = Some(name.clone());
    AUCTION.save(deps.storage, &auction)?;

    Ok(Response::new()
        .add_attribute("method", "set_display_name")
        .add_attribute("name", name))
}

fn transfer_funds_msg(
    asset: &BidAsset,
    amount: Uint128,
    recipient: &Addr,
    bid_denom: &str,
) -> Result<CosmosMsg, ContractError> {
    let msg = match asset {
        BidAsset::Native {} => CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: bid_denom.to_string(),
                amount,
            }],
        }),
        BidAsset::Token { address } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
    };
    Ok(msg)
}

fn item_transfer_msg(auction: &AuctionState, recipient: &Addr) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: auction.collection.to_string(),
        msg: to_binary(&collectible::msg::ExecuteMsg::TransferFrom {
            recipient: recipient.to_string(),
            token_id: auction.token_id.clone(),
        })?,
        funds: vec![],
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Info {} => to_binary(&query_info(deps)?),
        QueryMsg::DisplayName {} => {
            let auction = AUCTION.load(deps.storage)?;
            to_binary(&DisplayNameResponse {
                name: auction.display_name,
            })
        }
    }
}

fn query_info(deps: Deps) -> StdResult<InfoResponse> {
    let auction = AUCTION.load(deps.storage)?;
    Ok(InfoResponse {
        seller: auction.seller,
        starting_price: auction.starting_price,
        duration: auction.duration,
        end_time: auction.end_time,
        collection: auction.collection,
        token_id: auction.token_id,
        price_oracle: auction.price_oracle,
        bid_denom: auction.bid_denom,
        status: auction.status,
        highest_bid: auction.highest_bid,
        highest_bidder: auction.highest_bidder,
        highest_bid_asset: auction.highest_bid_asset,
        highest_bid_amount: auction.highest_bid_amount,
        display_name: auction.display_name,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Std(StdError::generic_err(
            "can only migrate from the auction contract",
        )));
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
