use crate::errors::Error;
use crate::types::{Auction, InitAuctionParams};
use soroban_sdk::Address;

pub const MAX_NAME_LEN: u32 = 64;

/// Price of one ticket: `funding_demand / (tokens_in_pool / token_quantity_per_ticket)`.
pub fn ticket_price(
    tokens_in_pool: i128,
    token_quantity_per_ticket: i128,
    funding_demand: i128,
) -> Result<i128, Error> {
    if tokens_in_pool <= 0 || token_quantity_per_ticket <= 0 || funding_demand <= 0 {
        return Err(Error::InvalidConfiguration);
    }
    let tickets = tokens_in_pool / token_quantity_per_ticket;
    if tickets == 0 {
        return Err(Error::InvalidConfiguration);
    }
    let price = funding_demand / tickets;
    if price == 0 {
        return Err(Error::InvalidConfiguration);
    }
    Ok(price)
}

/// Checks `params` and builds the initial auction record.
///
/// `native_token` becomes the payment asset when the sale is priced in the
/// native currency; otherwise `params.payment_token` must be set.
pub fn build_auction(
    owner: Address,
    native_token: &Address,
    params: InitAuctionParams,
    now: u64,
) -> Result<Auction, Error> {
    let name_len = params.name.len();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(Error::InvalidConfiguration);
    }

    if params.end_time <= params.start_time {
        return Err(Error::InvalidConfiguration);
    }

    if params.presale_enabled
        && (params.presale_start_time >= params.presale_end_time
            || params.presale_end_time > params.start_time)
    {
        return Err(Error::InvalidConfiguration);
    }

    let ticket_price = if params.fixed_price {
        if params.unit_price <= 0 || params.token_cap <= 0 {
            return Err(Error::InvalidConfiguration);
        }
        // The raise cap is token_cap * unit_price and must be representable.
        if params.token_cap.checked_mul(params.unit_price).is_none() {
            return Err(Error::InvalidConfiguration);
        }
        0
    } else {
        ticket_price(
            params.tokens_in_pool,
            params.token_quantity_per_ticket,
            params.funding_demand,
        )?
    };

    let payment_token = if params.pay_with_native {
        native_token.clone()
    } else {
        params.payment_token.ok_or(Error::InvalidConfiguration)?
    };
    if payment_token == params.sale_token {
        return Err(Error::InvalidConfiguration);
    }

    let mut auction = Auction {
        name: params.name,
        owner,
        sale_token: params.sale_token,
        payment_token,
        enabled: params.enabled,
        fixed_price: params.fixed_price,
        pay_with_native: params.pay_with_native,
        start_time: params.start_time,
        end_time: params.end_time,
        presale_enabled: params.presale_enabled,
        presale_start_time: params.presale_start_time,
        presale_end_time: params.presale_end_time,
        presale_allow_list: params.presale_allow_list,
        unit_price: params.unit_price,
        token_cap: params.token_cap,
        tokens_in_pool: params.tokens_in_pool,
        token_quantity_per_ticket: params.token_quantity_per_ticket,
        funding_demand: params.funding_demand,
        ticket_price,
        remaining_tokens: 0,
        total_raised: 0,
        funded: false,
        withdrawn: false,
        created_at: now,
    };
    auction.remaining_tokens = auction.initial_supply();

    // Unused mode fields are zeroed so the record only carries what it prices with.
    if auction.fixed_price {
        auction.tokens_in_pool = 0;
        auction.token_quantity_per_ticket = 0;
        auction.funding_demand = 0;
    } else {
        auction.unit_price = 0;
        auction.token_cap = 0;
    }
    if !auction.presale_enabled {
        auction.presale_start_time = 0;
        auction.presale_end_time = 0;
        auction.presale_allow_list = false;
    }

    Ok(auction)
}
