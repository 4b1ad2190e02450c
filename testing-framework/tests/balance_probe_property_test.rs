// File: testing-framework/tests/balance_probe_property_test.rs
//
// Balance-delta properties
//
// The fee model is linear and exact: for any non-negative gas price, a
// plain transfer costs its sender exactly amount + gas_price * gas_used,
// and credits the recipient exactly amount. No tolerance anywhere.

use proptest::prelude::*;
use swc_common::config::TX_BASE_GAS;
use swc_testing_framework::prelude::*;

fn transfer_case(amount: u64, gas_price: u64, slack: u64) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    rt.block_on(async {
        let net = TestNet::builder()
            .with_funded_account_count(0)
            .with_gas_price(U256::from(gas_price))
            .build()
            .unwrap();
        let chain = net.chain();

        let sender = Address::new([0x11; 20]);
        let recipient = Address::new([0x22; 20]);

        // Fund exactly enough for the transfer, the fee and some slack.
        let fee = U256::from(TX_BASE_GAS) * U256::from(gas_price);
        chain
            .fund(sender, U256::from(amount) + fee + U256::from(slack))
            .unwrap();

        let sender_probe = BalanceProbe::snapshot(chain, sender).await;
        let recipient_probe = BalanceProbe::snapshot(chain, recipient).await;

        let receipt = chain
            .transfer(sender, recipient, U256::from(amount))
            .await
            .unwrap();
        assert_eq!(receipt.gas_used, TX_BASE_GAS);

        sender_probe
            .expect_loss(U256::from(amount))
            .minus_fee(&receipt, chain.gas_price())
            .assert(chain)
            .await;
        recipient_probe
            .expect_gain(U256::from(amount))
            .assert(chain)
            .await;

        // Exactly the slack is left once the movement and fee are undone.
        assert_eq!(chain.balance(sender).await, U256::from(slack));
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_paying_transfer_is_exact(
        amount in 0u64..=u64::MAX / 4,
        gas_price in 0u64..=500_000_000_000u64,
        slack in 0u64..=u64::MAX / 4,
    ) {
        transfer_case(amount, gas_price, slack);
    }

    #[test]
    fn prop_zero_gas_price_charges_nothing(amount in 0u64..=u64::MAX / 4) {
        transfer_case(amount, 0, 0);
    }
}

#[test]
fn test_fee_free_observation_is_initial_plus_transfer() {
    // Degenerate but explicit: with no fee involved the expectation is a
    // pure delta.
    transfer_case(1_000_000, 0, 123_456);
}
