use crate::errors::Error;
use crate::types::{
    AllowListEntry, Auction, AuctionStatus, BuyerProgress, PaymentKind, SaleWindow, Vault,
};

/// Post-state of one accepted purchase.
///
/// Built entirely from the committed records before anything is written, then
/// applied by the contract in a single invocation together with the two
/// token transfers it describes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    pub amount: i128,
    pub tokens_out: i128,
    pub auction: Auction,
    pub vault: Vault,
    pub progress: BuyerProgress,
}

/// Sale-asset units owed for `amount` payment units, truncated toward zero.
pub fn tokens_for_payment(auction: &Auction, amount: i128) -> Result<i128, Error> {
    if auction.fixed_price {
        if auction.unit_price <= 0 {
            return Err(Error::InvalidConfiguration);
        }
        Ok(amount / auction.unit_price)
    } else {
        if auction.ticket_price <= 0 {
            return Err(Error::InvalidConfiguration);
        }
        (amount / auction.ticket_price)
            .checked_mul(auction.token_quantity_per_ticket)
            .ok_or(Error::ArithmeticOverflow)
    }
}

fn in_window(now: u64, start: u64, end: u64) -> bool {
    now >= start && now < end
}

/// Whether `window` currently accepts purchases, ignoring buyer-specific gates.
pub fn is_live(auction: &Auction, window: SaleWindow, now: u64) -> bool {
    if !auction.enabled || !auction.funded || auction.withdrawn {
        return false;
    }
    match window {
        SaleWindow::Presale => {
            auction.presale_enabled
                && in_window(now, auction.presale_start_time, auction.presale_end_time)
        }
        SaleWindow::Main => in_window(now, auction.start_time, auction.end_time),
    }
}

pub fn status(auction: &Auction, now: u64) -> AuctionStatus {
    if auction.withdrawn {
        return AuctionStatus::Settled;
    }
    if !auction.enabled {
        return AuctionStatus::Disabled;
    }
    if now >= auction.end_time {
        return AuctionStatus::Ended;
    }
    if !auction.funded {
        return AuctionStatus::Configured;
    }
    if is_live(auction, SaleWindow::Main, now) {
        AuctionStatus::Live
    } else if is_live(auction, SaleWindow::Presale, now) {
        AuctionStatus::PresaleOpen
    } else {
        AuctionStatus::Funded
    }
}

/// Validates a purchase of `amount` payment units and computes its effect.
///
/// Checks run in a fixed order so the first failing rule decides the error:
/// payment asset, amount, window, allow-list, then the three capacity limits.
pub fn plan_purchase(
    auction: &Auction,
    vault: &Vault,
    entry: Option<&AllowListEntry>,
    progress: Option<&BuyerProgress>,
    window: SaleWindow,
    payment: PaymentKind,
    amount: i128,
    now: u64,
) -> Result<Purchase, Error> {
    let native = payment == PaymentKind::Native;
    if native != auction.pay_with_native {
        return Err(Error::WrongPaymentAsset);
    }

    if amount <= 0 {
        return Err(Error::ZeroAmount);
    }

    if !is_live(auction, window, now) {
        return Err(Error::NotLive);
    }

    // The allow-list gates only the presale; its limit applies in both windows.
    if window == SaleWindow::Presale && auction.presale_allow_list {
        match entry {
            Some(e) if e.whitelisted => {}
            _ => return Err(Error::NotAllowed),
        }
    }

    let tokens_out = tokens_for_payment(auction, amount)?;
    if tokens_out <= 0 {
        return Err(Error::ZeroAmount);
    }

    let mut progress = progress.cloned().unwrap_or_default();
    let spent = progress
        .cumulative_spent
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if let Some(limit) = entry.and_then(AllowListEntry::spend_limit) {
        if spent > limit {
            return Err(Error::LimitExceeded);
        }
    }

    let raised = auction
        .total_raised
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if raised > auction.raise_cap()? {
        return Err(Error::CapExceeded);
    }

    if tokens_out > auction.remaining_tokens || tokens_out > vault.sale_balance {
        return Err(Error::InsufficientRemainingSupply);
    }

    let mut auction = auction.clone();
    auction.remaining_tokens -= tokens_out;
    auction.total_raised = raised;

    let mut vault = vault.clone();
    vault.sale_balance -= tokens_out;
    vault.payment_balance = vault
        .payment_balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    progress.cumulative_spent = spent;
    progress.cumulative_tokens_received = progress
        .cumulative_tokens_received
        .checked_add(tokens_out)
        .ok_or(Error::ArithmeticOverflow)?;
    progress.purchases = progress
        .purchases
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    progress.last_purchase_at = now;

    Ok(Purchase {
        amount,
        tokens_out,
        auction,
        vault,
        progress,
    })
}
