use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_auction(env: &Env, name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Auction(name.clone()))
}

pub fn get_auction(env: &Env, name: &String) -> Option<Auction> {
    env.storage()
        .persistent()
        .get(&DataKey::Auction(name.clone()))
}

pub fn load_auction(env: &Env, name: &String) -> Result<Auction, Error> {
    get_auction(env, name).ok_or(Error::NotFound)
}

pub fn set_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.name.clone());
    env.storage().persistent().set(&key, auction);
    extend_persistent(env, &key);
}

pub fn get_vault(env: &Env, name: &String) -> Option<Vault> {
    env.storage().persistent().get(&DataKey::Vault(name.clone()))
}

pub fn set_vault(env: &Env, name: &String, vault: &Vault) {
    let key = DataKey::Vault(name.clone());
    env.storage().persistent().set(&key, vault);
    extend_persistent(env, &key);
}

pub fn get_allow_list_entry(env: &Env, name: &String, buyer: &Address) -> Option<AllowListEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::AllowList(name.clone(), buyer.clone()))
}

pub fn set_allow_list_entry(env: &Env, name: &String, buyer: &Address, entry: &AllowListEntry) {
    let key = DataKey::AllowList(name.clone(), buyer.clone());
    env.storage().persistent().set(&key, entry);
    extend_persistent(env, &key);
}

/// Keeps an entry alive when a purchase reads it without rewriting it.
pub fn extend_allow_list_entry(env: &Env, name: &String, buyer: &Address) {
    extend_persistent(env, &DataKey::AllowList(name.clone(), buyer.clone()));
}

pub fn get_buyer_progress(env: &Env, name: &String, buyer: &Address) -> Option<BuyerProgress> {
    env.storage()
        .persistent()
        .get(&DataKey::BuyerProgress(name.clone(), buyer.clone()))
}

pub fn set_buyer_progress(env: &Env, name: &String, buyer: &Address, progress: &BuyerProgress) {
    let key = DataKey::BuyerProgress(name.clone(), buyer.clone());
    env.storage().persistent().set(&key, progress);
    extend_persistent(env, &key);
}
