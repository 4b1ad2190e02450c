// File: testing-framework/src/balance.rs
//
// Balance-delta verifier
//
// Snapshot an account, run one transaction, then assert the exact final
// balance: initial, minus the fee when the observed account paid it, plus
// or minus the expected value movement. Balances are large integers, so
// equality is exact with no tolerance.

use log::error;
use primitive_types::U256;
use swc_chain::{TestChain, TransactionReceipt};
use swc_common::crypto::Address;

/// Immutable balance snapshot of one account, taken before the action
/// under test. Consumed by the assertion; nothing outlives the test.
pub struct BalanceProbe {
    account: Address,
    before: U256,
}

impl BalanceProbe {
    pub async fn snapshot(chain: &TestChain, account: Address) -> Self {
        let before = chain.balance(account).await;
        Self { account, before }
    }

    pub fn before(&self) -> U256 {
        self.before
    }

    /// The observed account should end up richer by `amount`.
    pub fn expect_gain(self, amount: U256) -> BalanceExpectation {
        BalanceExpectation {
            probe: self,
            fee: U256::zero(),
            gain: amount,
            loss: U256::zero(),
        }
    }

    /// The observed account should end up poorer by `amount`.
    pub fn expect_loss(self, amount: U256) -> BalanceExpectation {
        BalanceExpectation {
            probe: self,
            fee: U256::zero(),
            gain: U256::zero(),
            loss: amount,
        }
    }

    /// No net value movement for the observed account.
    pub fn unchanged(self) -> BalanceExpectation {
        self.expect_gain(U256::zero())
    }
}

/// One balance assertion in the making.
pub struct BalanceExpectation {
    probe: BalanceProbe,
    fee: U256,
    gain: U256,
    loss: U256,
}

impl BalanceExpectation {
    /// Account for the fee the observed account paid for `receipt`:
    /// `gas_price * gas_used`. Call once per fee-paying transaction it
    /// submitted between snapshot and assertion.
    pub fn minus_fee(mut self, receipt: &TransactionReceipt, gas_price: U256) -> Self {
        let fee = U256::from(receipt.gas_used) * gas_price;
        self.fee = self
            .fee
            .checked_add(fee)
            .expect("fee accumulation overflowed");
        self
    }

    /// Expected final balance under this expectation.
    pub fn expected(&self) -> U256 {
        self.probe
            .before
            .checked_add(self.gain)
            .and_then(|total| total.checked_sub(self.fee))
            .and_then(|total| total.checked_sub(self.loss))
            .expect("expected balance is not representable")
    }

    /// Fetch the account's current balance and compare, panicking with the
    /// full delta breakdown on mismatch.
    pub async fn assert(self, chain: &TestChain) {
        let expected = self.expected();
        let actual = chain.balance(self.probe.account).await;
        if actual != expected {
            error!(
                "balance mismatch: {}",
                serde_json::json!({
                    "account": self.probe.account.to_string(),
                    "before": self.probe.before.to_string(),
                    "fee": self.fee.to_string(),
                    "gain": self.gain.to_string(),
                    "loss": self.loss.to_string(),
                    "expected": expected.to_string(),
                    "actual": actual.to_string(),
                })
            );
        }
        assert_eq!(
            actual, expected,
            "final balance of {} diverged from expectation",
            self.probe.account
        );
    }
}
