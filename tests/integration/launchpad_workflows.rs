//! End-to-end sale flows through presale, main window and settlement.
use crate::assert_contract_error;
use crate::utils::constants::{BUYER_BALANCE, OWNER_BALANCE, START};
use crate::utils::{AuctionBuilder, LaunchpadFixture};
use launchpad::{AuctionStatus, Error};

#[test]
fn test_ticket_sale_full_lifecycle() {
    let fixture = LaunchpadFixture::new();
    let (owner, sale) = fixture.project();

    // 900 tickets of 400k tokens for a total demand of 1782 native units (7 decimals).
    let params = AuctionBuilder::fixed(&fixture, "sobb", &sale)
        .tickets(360_000_000, 400_000, 17_820_000_000)
        .native()
        .window(START + 3_600, START + 7_200)
        .presale(START, START + 1_800, true)
        .build();

    fixture.client.init_auction(&owner, &params);
    let name = params.name.clone();
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::Configured);

    fixture.client.fund_vault(&owner, &name);
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::Funded);
    assert_eq!(fixture.client.quote(&name, &19_800_000), 400_000);

    let mut whitelisted = Vec::new();
    for _ in 0..11 {
        let buyer = fixture.buyer();
        fixture
            .client
            .set_allow_list_entry(&owner, &name, &buyer, &true, &Some(39_600_000));
        whitelisted.push(buyer);
    }
    let latecomer = fixture.buyer();

    fixture.set_time(START + 10);
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::PresaleOpen);
    for buyer in whitelisted.iter() {
        assert_eq!(
            fixture.client.pre_sale_buy_native(buyer, &name, &19_800_000),
            400_000
        );
    }
    assert_contract_error!(
        fixture
            .client
            .try_pre_sale_buy_native(&latecomer, &name, &19_800_000),
        Error::NotAllowed
    );

    fixture.set_time(START + 3_600);
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::Live);
    assert_eq!(
        fixture.client.buy_native(&latecomer, &name, &(19_800_000 * 3)),
        1_200_000
    );
    // Whitelisted buyers are capped at two tickets across both windows.
    assert_eq!(
        fixture.client.buy_native(&whitelisted[0], &name, &19_800_000),
        400_000
    );
    assert_contract_error!(
        fixture.client.try_buy_native(&whitelisted[0], &name, &19_800_000),
        Error::LimitExceeded
    );

    let sold: i128 = 15 * 400_000;
    let raised: i128 = 15 * 19_800_000;
    let auction = fixture.client.get_auction(&name).unwrap();
    assert_eq!(auction.remaining_tokens, 360_000_000 - sold);
    assert_eq!(auction.total_raised, raised);
    assert_eq!(
        fixture.native.client.balance(&latecomer),
        BUYER_BALANCE - 19_800_000 * 3
    );

    fixture.set_time(START + 7_200);
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::Ended);
    assert_contract_error!(
        fixture.client.try_buy_native(&latecomer, &name, &19_800_000),
        Error::NotLive
    );

    fixture.client.withdraw_proceeds(&owner, &name);
    assert_eq!(fixture.client.get_status(&name), AuctionStatus::Settled);
    assert_eq!(fixture.native.client.balance(&owner), raised);
    assert_eq!(sale.client.balance(&owner), OWNER_BALANCE - sold);
    assert_eq!(fixture.native.client.balance(&fixture.contract_id), 0);
    assert_eq!(sale.client.balance(&fixture.contract_id), 0);
}

#[test]
fn test_sell_out_then_settle() {
    let fixture = LaunchpadFixture::new();
    let (owner, sale) = fixture.project();
    let name = AuctionBuilder::fixed(&fixture, "sellout", &sale)
        .price(10, 100)
        .launch(&fixture, &owner);

    let buyers = [fixture.buyer(), fixture.buyer()];
    fixture.set_time(START + 5);
    assert_eq!(fixture.client.buy(&buyers[0], &name, &600), 60);
    assert_eq!(fixture.client.buy(&buyers[1], &name, &400), 40);
    assert_eq!(fixture.client.get_auction(&name).unwrap().remaining_tokens, 0);
    assert_contract_error!(
        fixture.client.try_buy(&buyers[1], &name, &10),
        Error::CapExceeded
    );

    fixture.set_time(START + 1_000);
    fixture.client.withdraw_proceeds(&owner, &name);
    assert_eq!(fixture.payment.client.balance(&owner), 1_000);
    assert_eq!(sale.client.balance(&owner), OWNER_BALANCE - 100);
    assert_eq!(sale.client.balance(&buyers[0]), 60);
    assert_eq!(sale.client.balance(&buyers[1]), 40);
}

#[test]
fn test_paused_sale_resumes() {
    let fixture = LaunchpadFixture::new();
    let (owner, sale) = fixture.project();
    let name = AuctionBuilder::fixed(&fixture, "paused", &sale).launch(&fixture, &owner);
    let buyer = fixture.buyer();

    fixture.set_time(START + 1);
    fixture.client.set_enabled(&owner, &name, &false);
    assert_contract_error!(fixture.client.try_buy(&buyer, &name, &5), Error::NotLive);

    fixture.client.set_enabled(&owner, &name, &true);
    assert_eq!(fixture.client.buy(&buyer, &name, &5), 5);
}

#[test]
fn test_disabled_at_creation_until_enabled() {
    let fixture = LaunchpadFixture::new();
    let (owner, sale) = fixture.project();
    let mut params = AuctionBuilder::fixed(&fixture, "staged", &sale).build();
    params.enabled = false;

    fixture.client.init_auction(&owner, &params);
    fixture.client.fund_vault(&owner, &params.name);
    let buyer = fixture.buyer();

    fixture.set_time(START + 1);
    assert_eq!(
        fixture.client.get_status(&params.name),
        AuctionStatus::Disabled
    );
    assert_contract_error!(
        fixture.client.try_buy(&buyer, &params.name, &1),
        Error::NotLive
    );
    fixture.client.set_enabled(&owner, &params.name, &true);
    assert_eq!(fixture.client.buy(&buyer, &params.name, &1), 1);
}
