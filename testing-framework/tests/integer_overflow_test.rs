// File: testing-framework/tests/integer_overflow_test.rs
//
// SWC-101 Integer Overflow and Underflow
//
// Four paired contracts. The vulnerable variants wrap silently; the fixed
// variants reject with the SafeMath reason for the operation that would
// have wrapped.

use swc_testing_framework::prelude::*;

// ============================================================================
// TokenSaleChallenge
// ============================================================================

#[tokio::test]
async fn test_overflows_buy_require_statement() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let sale = net.deploy("TokenSaleChallenge", &[], funder).await.unwrap();

    // 256 truncates to 0 tokens in the 8-bit accounting, so the attached
    // value no longer matches the computed cost.
    expect_revert(
        chain
            .send(
                sale,
                "buy",
                &[Value::from(256u64)],
                TxOptions::from(funder).with_value(U256::from(256u64)),
            )
            .await,
        "buy: Require Statement",
    );
}

#[tokio::test]
async fn test_overflows_sell_transfer_statement() {
    let net = TestNet::builder().with_funded_account_count(2).build().unwrap();
    let chain = net.chain();
    let (funder, operator) = (net.account(0), net.account(1));
    let gas_price = chain.gas_price();

    let sale = net.deploy("TokenSaleChallenge", &[], operator).await.unwrap();
    chain.transfer(funder, sale, U256::from(128u64)).await.unwrap();

    chain
        .send(
            sale,
            "buy",
            &[Value::from(128u64)],
            TxOptions::from(funder).with_value(U256::from(128u64)),
        )
        .await
        .unwrap();

    let probe = BalanceProbe::snapshot(chain, funder).await;
    let contract_before = chain.balance(sale).await;
    chain
        .send(sale, "change_price", &[Value::from(2u64)], operator)
        .await
        .unwrap();

    // 128 tokens at price 2 wraps to a payout of 0 wei: the seller pays
    // gas for nothing and the contract keeps everything.
    let receipt = chain
        .send(sale, "sell", &[Value::from(128u64)], funder)
        .await
        .unwrap();

    probe
        .unchanged()
        .minus_fee(&receipt, gas_price)
        .assert(chain)
        .await;
    assert_eq!(chain.balance(sale).await, contract_before);
}

#[tokio::test]
async fn test_fixed_reverts_on_overflow_buy_require_statement() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let sale = net
        .deploy("TokenSaleChallengeFixed", &[], funder)
        .await
        .unwrap();

    expect_revert_unspecified(
        chain
            .send(
                sale,
                "buy",
                &[Value::from(256u64)],
                TxOptions::from(funder).with_value(U256::from(256u64)),
            )
            .await,
    );
}

#[tokio::test]
async fn test_fixed_reverts_on_overflow_sell_transfer_statement() {
    let net = TestNet::builder().with_funded_account_count(2).build().unwrap();
    let chain = net.chain();
    let (funder, operator) = (net.account(0), net.account(1));

    let sale = net
        .deploy("TokenSaleChallengeFixed", &[], operator)
        .await
        .unwrap();
    chain.transfer(funder, sale, U256::from(128u64)).await.unwrap();

    chain
        .send(
            sale,
            "buy",
            &[Value::from(128u64)],
            TxOptions::from(funder).with_value(U256::from(128u64)),
        )
        .await
        .unwrap();
    chain
        .send(sale, "change_price", &[Value::from(2u64)], operator)
        .await
        .unwrap();

    expect_revert(
        chain.send(sale, "sell", &[Value::from(128u64)], funder).await,
        "SafeMath: multiplication overflow",
    );
}

// ============================================================================
// IntegerOverflowMappingSym1
// ============================================================================

#[tokio::test]
async fn test_mapping_overflows_on_subtraction() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net
        .deploy("IntegerOverflowMappingSym1", &[], funder)
        .await
        .unwrap();
    chain
        .send(
            contract,
            "init",
            &[Value::from(0u64), Value::from(1u64)],
            funder,
        )
        .await
        .unwrap();

    let mapped = chain
        .query(contract, "map", &[Value::from(0u64)])
        .await
        .unwrap();
    assert_eq!(mapped, Value::Uint(U256::MAX));
}

#[tokio::test]
async fn test_mapping_fixed_reverts_on_subtraction() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net
        .deploy("IntegerOverflowMappingSym1Fixed", &[], funder)
        .await
        .unwrap();

    expect_revert(
        chain
            .send(
                contract,
                "init",
                &[Value::from(0u64), Value::from(1u64)],
                funder,
            )
            .await,
        "SafeMath: subtraction overflow",
    );
}

// ============================================================================
// IntegerOverflowMinimal
// ============================================================================

#[tokio::test]
async fn test_minimal_overflows_on_subtraction() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net
        .deploy("IntegerOverflowMinimal", &[], funder)
        .await
        .unwrap();
    chain
        .send(contract, "run", &[Value::from(2u64)], funder)
        .await
        .unwrap();

    let count = chain.query(contract, "count", &[]).await.unwrap();
    assert_eq!(count, Value::Uint(U256::MAX));
}

#[tokio::test]
async fn test_minimal_fixed_reverts_on_subtraction() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net
        .deploy("IntegerOverflowMinimalFixed", &[], funder)
        .await
        .unwrap();

    expect_revert(
        chain.send(contract, "run", &[Value::from(2u64)], funder).await,
        "SafeMath: subtraction overflow",
    );
}

// ============================================================================
// IntegerOverflowMul
// ============================================================================

#[tokio::test]
async fn test_mul_overflows_on_multiplication() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net.deploy("IntegerOverflowMul", &[], funder).await.unwrap();
    chain
        .send(contract, "run", &[Value::from(2u64)], funder)
        .await
        .unwrap();

    // 2^255 doubled wraps all the way around to zero.
    let count = chain.query(contract, "count", &[]).await.unwrap();
    assert_eq!(count, Value::Uint(U256::zero()));
}

#[tokio::test]
async fn test_mul_fixed_reverts_on_multiplication() {
    let net = TestNet::builder().with_funded_account_count(1).build().unwrap();
    let chain = net.chain();
    let funder = net.account(0);

    let contract = net
        .deploy("IntegerOverflowMulFixed", &[], funder)
        .await
        .unwrap();

    expect_revert(
        chain.send(contract, "run", &[Value::from(2u64)], funder).await,
        "SafeMath: multiplication overflow",
    );
}
