use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Env, String};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    pub native_token: Address, // Stellar Asset Contract of the native currency
}

/// Caller-supplied configuration for a new auction.
///
/// Fields that belong to the other pricing mode are ignored: a fixed-price
/// auction never reads the ticket fields and vice versa.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InitAuctionParams {
    pub name: String,
    pub enabled: bool,
    pub fixed_price: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub sale_token: Address,
    pub pay_with_native: bool,
    pub payment_token: Option<Address>, // required unless pay_with_native
    pub unit_price: i128,
    pub token_cap: i128,
    pub tokens_in_pool: i128,
    pub token_quantity_per_ticket: i128,
    pub funding_demand: i128,
    pub presale_enabled: bool,
    pub presale_start_time: u64,
    pub presale_end_time: u64,
    pub presale_allow_list: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Auction {
    pub name: String,
    pub owner: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub enabled: bool,
    pub fixed_price: bool,
    pub pay_with_native: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub presale_enabled: bool,
    pub presale_start_time: u64,
    pub presale_end_time: u64,
    pub presale_allow_list: bool,
    pub unit_price: i128, // payment units per sale-asset unit
    pub token_cap: i128,
    pub tokens_in_pool: i128,
    pub token_quantity_per_ticket: i128,
    pub funding_demand: i128,
    pub ticket_price: i128, // funding_demand / ticket count, fixed at creation
    pub remaining_tokens: i128,
    pub total_raised: i128,
    pub funded: bool,
    pub withdrawn: bool,
    pub created_at: u64,
}

impl Auction {
    /// Sale-asset units the vault is funded with.
    pub fn initial_supply(&self) -> i128 {
        if self.fixed_price {
            self.token_cap
        } else {
            self.tokens_in_pool
        }
    }

    /// Ceiling on `total_raised`, in payment units.
    pub fn raise_cap(&self) -> Result<i128, Error> {
        if self.fixed_price {
            self.token_cap
                .checked_mul(self.unit_price)
                .ok_or(Error::ArithmeticOverflow)
        } else {
            Ok(self.funding_demand)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Vault {
    pub sale_balance: i128,
    pub payment_balance: i128,
    pub funded_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowListEntry {
    pub whitelisted: bool,
    pub limit: Option<i128>, // None or zero: no per-buyer ceiling
    pub updated_at: u64,
}

impl AllowListEntry {
    pub fn spend_limit(&self) -> Option<i128> {
        match self.limit {
            Some(limit) if limit > 0 => Some(limit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct BuyerProgress {
    pub cumulative_spent: i128,
    pub cumulative_tokens_received: i128,
    pub purchases: u32,
    pub last_purchase_at: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AuctionStatus {
    Disabled = 0,
    Configured = 1,
    Funded = 2,
    PresaleOpen = 3,
    Live = 4,
    Ended = 5,
    Settled = 6,
}

/// Which purchase window a buy targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleWindow {
    Presale,
    Main,
}

/// Which payment asset the caller expects to pay with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentKind {
    Native,
    Asset,
}

#[contracttype]
pub enum DataKey {
    Config,
    Auction(String),
    Vault(String),
    AllowList(String, Address),
    BuyerProgress(String, Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
