/// Assert a `try_*` client call failed with a specific contract error.
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected:expr) => {
        match $result {
            Err(Ok(err)) => assert_eq!(err, $expected, "Contract error mismatch"),
            Err(Err(other)) => panic!("Expected contract error, got host error {:?}", other),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
}

/// Assert the custody balances held for an auction.
#[macro_export]
macro_rules! assert_vault {
    ($fixture:expr, $name:expr, $sale:expr, $payment:expr) => {
        let vault = $fixture.client.get_vault($name).unwrap();
        assert_eq!(vault.sale_balance, $sale, "Sale balance mismatch");
        assert_eq!(vault.payment_balance, $payment, "Payment balance mismatch");
    };
}
