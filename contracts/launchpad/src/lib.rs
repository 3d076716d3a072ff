#![no_std]
#![allow(clippy::too_many_arguments)]

mod contract;
mod errors;
mod events;
mod sale;
mod storage;
mod types;
mod validation;


pub use contract::{LaunchpadContract, LaunchpadContractClient};
pub use errors::Error;
pub use types::{
    AllowListEntry, Auction, AuctionStatus, BuyerProgress, Config, InitAuctionParams, Vault,
};
pub use validation::MAX_NAME_LEN;
