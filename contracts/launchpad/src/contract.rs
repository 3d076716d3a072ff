use crate::errors::Error;
use crate::events;
use crate::sale::{self, Purchase};
use crate::storage::*;
use crate::types::*;
use crate::validation::build_auction;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, String};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-gated launchpad with allow-listed presale and escrowed proceeds"
);

#[contract]
pub struct LaunchpadContract;

#[contractimpl]
impl LaunchpadContract {
    /// One-time setup: records the admin and the native-currency asset contract.
    pub fn initialize(env: Env, admin: Address, native_token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_config(&env, &Config { admin, native_token });
        extend_instance(&env);
        Ok(())
    }

    /// Create a named auction owned by `owner`.
    pub fn init_auction(env: Env, owner: Address, params: InitAuctionParams) -> Result<(), Error> {
        let config = get_config(&env)?;
        owner.require_auth();

        if has_auction(&env, &params.name) {
            return Err(Error::AlreadyExists);
        }

        let now = get_ledger_timestamp(&env);
        let auction = build_auction(owner, &config.native_token, params, now)?;
        set_auction(&env, &auction);
        extend_instance(&env);

        events::emit_auction_created(
            &env,
            auction.name.clone(),
            auction.owner.clone(),
            auction.sale_token.clone(),
            auction.payment_token.clone(),
            auction.fixed_price,
            auction.initial_supply(),
            auction.start_time,
            auction.end_time,
        );
        Ok(())
    }

    /// Move the full configured supply from the owner into custody.
    pub fn fund_vault(env: Env, caller: Address, name: String) -> Result<(), Error> {
        get_config(&env)?;
        caller.require_auth();

        let mut auction = load_auction(&env, &name)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }
        if auction.funded {
            return Err(Error::AlreadyFunded);
        }
        let now = get_ledger_timestamp(&env);
        if now >= auction.start_time {
            return Err(Error::WindowClosed);
        }

        let supply = auction.initial_supply();
        token::Client::new(&env, &auction.sale_token).transfer(
            &auction.owner,
            &env.current_contract_address(),
            &supply,
        );

        let vault = Vault {
            sale_balance: supply,
            payment_balance: 0,
            funded_at: now,
        };
        auction.funded = true;
        set_vault(&env, &name, &vault);
        set_auction(&env, &auction);
        extend_instance(&env);

        events::emit_vault_funded(&env, name, auction.owner, supply);
        Ok(())
    }

    /// Create or overwrite the allow-list entry of `buyer`.
    ///
    /// A `limit` of `None` or zero leaves the buyer bounded only by the sale cap.
    /// Accumulated buyer progress is never reset.
    pub fn set_allow_list_entry(
        env: Env,
        caller: Address,
        name: String,
        buyer: Address,
        whitelisted: bool,
        limit: Option<i128>,
    ) -> Result<(), Error> {
        get_config(&env)?;
        caller.require_auth();

        let auction = load_auction(&env, &name)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }
        if matches!(limit, Some(l) if l < 0) {
            return Err(Error::InvalidConfiguration);
        }

        let entry = AllowListEntry {
            whitelisted,
            limit,
            updated_at: get_ledger_timestamp(&env),
        };
        set_allow_list_entry(&env, &name, &buyer, &entry);
        extend_instance(&env);

        events::emit_allow_list_set(&env, name, buyer, whitelisted, limit);
        Ok(())
    }

    /// Presale purchase paid in the native currency.
    pub fn pre_sale_buy_native(
        env: Env,
        buyer: Address,
        name: String,
        amount: i128,
    ) -> Result<i128, Error> {
        Self::purchase(&env, buyer, name, SaleWindow::Presale, PaymentKind::Native, amount)
    }

    /// Presale purchase paid in the auction's payment asset.
    pub fn pre_sale_buy(env: Env, buyer: Address, name: String, amount: i128) -> Result<i128, Error> {
        Self::purchase(&env, buyer, name, SaleWindow::Presale, PaymentKind::Asset, amount)
    }

    /// Main-window purchase paid in the native currency.
    pub fn buy_native(env: Env, buyer: Address, name: String, amount: i128) -> Result<i128, Error> {
        Self::purchase(&env, buyer, name, SaleWindow::Main, PaymentKind::Native, amount)
    }

    /// Main-window purchase paid in the auction's payment asset.
    pub fn buy(env: Env, buyer: Address, name: String, amount: i128) -> Result<i128, Error> {
        Self::purchase(&env, buyer, name, SaleWindow::Main, PaymentKind::Asset, amount)
    }

    /// Settle a closed auction: proceeds and unsold supply go back to the owner.
    pub fn withdraw_proceeds(env: Env, caller: Address, name: String) -> Result<(), Error> {
        get_config(&env)?;
        caller.require_auth();

        let mut auction = load_auction(&env, &name)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }
        if auction.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }
        if get_ledger_timestamp(&env) < auction.end_time {
            return Err(Error::NotYetEnded);
        }

        let vault = get_vault(&env, &name).unwrap_or_default();
        let contract_address = env.current_contract_address();
        if vault.payment_balance > 0 {
            token::Client::new(&env, &auction.payment_token).transfer(
                &contract_address,
                &auction.owner,
                &vault.payment_balance,
            );
        }
        if vault.sale_balance > 0 {
            token::Client::new(&env, &auction.sale_token).transfer(
                &contract_address,
                &auction.owner,
                &vault.sale_balance,
            );
        }

        auction.withdrawn = true;
        auction.enabled = false;
        set_vault(
            &env,
            &name,
            &Vault {
                sale_balance: 0,
                payment_balance: 0,
                funded_at: vault.funded_at,
            },
        );
        set_auction(&env, &auction);
        extend_instance(&env);

        events::emit_proceeds_withdrawn(
            &env,
            name,
            auction.owner,
            vault.payment_balance,
            vault.sale_balance,
        );
        Ok(())
    }

    /// Pause or resume purchases on an unsettled auction.
    pub fn set_enabled(env: Env, caller: Address, name: String, enabled: bool) -> Result<(), Error> {
        get_config(&env)?;
        caller.require_auth();

        let mut auction = load_auction(&env, &name)?;
        if caller != auction.owner {
            return Err(Error::Unauthorized);
        }
        if auction.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }

        auction.enabled = enabled;
        set_auction(&env, &auction);
        extend_instance(&env);

        events::emit_enabled_changed(&env, name, enabled);
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<Config, Error> {
        get_config(&env)
    }

    pub fn get_auction(env: Env, name: String) -> Option<Auction> {
        get_auction(&env, &name)
    }

    pub fn get_vault(env: Env, name: String) -> Option<Vault> {
        get_vault(&env, &name)
    }

    pub fn get_allow_list_entry(env: Env, name: String, buyer: Address) -> Option<AllowListEntry> {
        get_allow_list_entry(&env, &name, &buyer)
    }

    pub fn get_buyer_progress(env: Env, name: String, buyer: Address) -> Option<BuyerProgress> {
        get_buyer_progress(&env, &name, &buyer)
    }

    pub fn get_status(env: Env, name: String) -> Result<AuctionStatus, Error> {
        let auction = load_auction(&env, &name)?;
        Ok(sale::status(&auction, get_ledger_timestamp(&env)))
    }

    /// Sale-asset units `amount` would buy right now, ignoring windows and limits.
    pub fn quote(env: Env, name: String, amount: i128) -> Result<i128, Error> {
        let auction = load_auction(&env, &name)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        sale::tokens_for_payment(&auction, amount)
    }
}

impl LaunchpadContract {
    fn purchase(
        env: &Env,
        buyer: Address,
        name: String,
        window: SaleWindow,
        payment: PaymentKind,
        amount: i128,
    ) -> Result<i128, Error> {
        get_config(env)?;
        buyer.require_auth();

        let auction = load_auction(env, &name)?;
        let vault = get_vault(env, &name).unwrap_or_default();
        let entry = get_allow_list_entry(env, &name, &buyer);
        let progress = get_buyer_progress(env, &name, &buyer);

        let Purchase {
            amount,
            tokens_out,
            auction,
            vault,
            progress,
        } = sale::plan_purchase(
            &auction,
            &vault,
            entry.as_ref(),
            progress.as_ref(),
            window,
            payment,
            amount,
            get_ledger_timestamp(env),
        )?;

        let contract_address = env.current_contract_address();
        token::Client::new(env, &auction.payment_token).transfer(
            &buyer,
            &contract_address,
            &amount,
        );
        token::Client::new(env, &auction.sale_token).transfer(
            &contract_address,
            &buyer,
            &tokens_out,
        );

        set_auction(env, &auction);
        set_vault(env, &name, &vault);
        set_buyer_progress(env, &name, &buyer, &progress);
        if entry.is_some() {
            extend_allow_list_entry(env, &name, &buyer);
        }
        extend_instance(env);

        events::emit_purchase(
            env,
            name,
            buyer,
            window == SaleWindow::Presale,
            amount,
            tokens_out,
            auction.remaining_tokens,
            auction.total_raised,
        );
        Ok(tokens_out)
    }
}
