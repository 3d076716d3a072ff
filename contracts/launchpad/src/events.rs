use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ==================== Event Payload Structs ====================
// Every event is published under the topic pair (LAUNCH, <kind>) so indexers
// can follow one sale by filtering on the `name` field of the payload.

const TOPIC: Symbol = symbol_short!("LAUNCH");

#[derive(Clone)]
#[contracttype]
pub struct AuctionCreatedEvent {
    pub name: String,
    pub owner: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub fixed_price: bool,
    pub initial_supply: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct VaultFundedEvent {
    pub name: String,
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowListEvent {
    pub name: String,
    pub buyer: Address,
    pub whitelisted: bool,
    pub limit: Option<i128>,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PurchaseEvent {
    pub name: String,
    pub buyer: Address,
    pub presale: bool,
    pub amount_paid: i128,
    pub tokens_received: i128,
    pub remaining_tokens: i128,
    pub total_raised: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ProceedsWithdrawnEvent {
    pub name: String,
    pub owner: Address,
    pub payment_amount: i128,
    pub unsold_tokens: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct EnabledChangedEvent {
    pub name: String,
    pub enabled: bool,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_auction_created(
    env: &Env,
    name: String,
    owner: Address,
    sale_token: Address,
    payment_token: Address,
    fixed_price: bool,
    initial_supply: i128,
    start_time: u64,
    end_time: u64,
) {
    env.events().publish(
        (TOPIC, symbol_short!("AUC_NEW")),
        AuctionCreatedEvent {
            name,
            owner,
            sale_token,
            payment_token,
            fixed_price,
            initial_supply,
            start_time,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_vault_funded(env: &Env, name: String, owner: Address, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("FUNDED")),
        VaultFundedEvent {
            name,
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_allow_list_set(
    env: &Env,
    name: String,
    buyer: Address,
    whitelisted: bool,
    limit: Option<i128>,
) {
    env.events().publish(
        (TOPIC, symbol_short!("ALLOW_SET")),
        AllowListEvent {
            name,
            buyer,
            whitelisted,
            limit,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_purchase(
    env: &Env,
    name: String,
    buyer: Address,
    presale: bool,
    amount_paid: i128,
    tokens_received: i128,
    remaining_tokens: i128,
    total_raised: i128,
) {
    env.events().publish(
        (TOPIC, symbol_short!("PURCHASE")),
        PurchaseEvent {
            name,
            buyer,
            presale,
            amount_paid,
            tokens_received,
            remaining_tokens,
            total_raised,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_proceeds_withdrawn(
    env: &Env,
    name: String,
    owner: Address,
    payment_amount: i128,
    unsold_tokens: i128,
) {
    env.events().publish(
        (TOPIC, symbol_short!("WITHDRAWN")),
        ProceedsWithdrawnEvent {
            name,
            owner,
            payment_amount,
            unsold_tokens,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_enabled_changed(env: &Env, name: String, enabled: bool) {
    env.events().publish(
        (TOPIC, symbol_short!("ENABLED")),
        EnabledChangedEvent {
            name,
            enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}
