use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Auction is not active")]
    AuctionNotActive {},

    #[error("Auction already started")]
    AlreadyStarted {},

    #[error("Bidding period has closed")]
    BiddingClosed {},

    #[error("Bid too low")]
    BidTooLow {},

    #[error("Seller cannot bid on their own auction")]
    SellerCannotBid {},

    #[error("Attached funds do not match the bid amount")]
    PaymentMismatch {},

    #[error("Display name already set")]
    AlreadyInitialized {},
}
