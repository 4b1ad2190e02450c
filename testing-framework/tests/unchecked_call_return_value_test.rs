// File: testing-framework/tests/unchecked_call_return_value_test.rs
//
// SWC-104 Unchecked Call Return Value
//
// ReturnValue performs a low-level call against a counterparty whose
// fallback always fails. Ignoring that result leaves the transaction
// successful; checking it turns the failure into a revert.

use swc_testing_framework::prelude::*;

#[tokio::test]
async fn test_does_not_revert_on_call_failure() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let return_value = net.deploy("ReturnValue", &[], funder).await.unwrap();
    let attacker = net.deploy("ReturnValueAttacker", &[], funder).await.unwrap();

    chain
        .send(
            return_value,
            "call_not_checked",
            &[Value::Address(attacker)],
            funder,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reverts_on_call_failure() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let return_value = net.deploy("ReturnValue", &[], funder).await.unwrap();
    let attacker = net.deploy("ReturnValueAttacker", &[], funder).await.unwrap();

    expect_revert(
        chain
            .send(
                return_value,
                "call_checked",
                &[Value::Address(attacker)],
                funder,
            )
            .await,
        "Call Failed",
    );
}
