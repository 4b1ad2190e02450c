// File: testing-framework/src/fixture.rs
//
// Per-test chain fixture
//
// Every test case builds its own TestNet: a fresh chain with the suite's
// artifact registry and a row of genesis-funded accounts. Nothing is shared
// between cases, so no cleanup is ever needed.

use anyhow::{Context, Result};
use primitive_types::U256;
use swc_chain::{TestChain, TxOptions, Value};
use swc_common::{config::DEFAULT_GAS_PRICE, crypto::Address, utils::ether};

/// Fresh chain plus funded accounts, handed to one test case.
pub struct TestNet {
    chain: TestChain,
    accounts: Vec<Address>,
}

impl TestNet {
    pub fn builder() -> TestNetBuilder {
        TestNetBuilder::new()
    }

    pub fn chain(&self) -> &TestChain {
        &self.chain
    }

    /// Genesis-funded account by index; panics when the fixture was built
    /// with fewer accounts (a test-authoring mistake, not a runtime case).
    pub fn account(&self, index: usize) -> Address {
        self.accounts[index]
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    /// Deploy a suite artifact with deployment context attached to the
    /// error, since a bad artifact name is the most common fixture typo.
    pub async fn deploy(
        &self,
        artifact: &str,
        args: &[Value],
        opts: impl Into<TxOptions>,
    ) -> Result<Address> {
        self.chain
            .deploy(artifact, args, opts)
            .await
            .with_context(|| format!("deploying artifact '{}'", artifact))
    }
}

/// Builder for [`TestNet`].
pub struct TestNetBuilder {
    funded_accounts: usize,
    initial_balance: U256,
    gas_price: U256,
}

impl TestNetBuilder {
    pub fn new() -> Self {
        Self {
            funded_accounts: 4,
            initial_balance: ether(100),
            gas_price: U256::from(DEFAULT_GAS_PRICE),
        }
    }

    pub fn with_funded_account_count(mut self, count: usize) -> Self {
        self.funded_accounts = count;
        self
    }

    pub fn with_initial_balance(mut self, balance: U256) -> Self {
        self.initial_balance = balance;
        self
    }

    pub fn with_gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn build(self) -> Result<TestNet> {
        let chain = TestChain::with_gas_price(swc_contracts::registry(), self.gas_price);

        let mut rng = rand::thread_rng();
        let mut accounts = Vec::with_capacity(self.funded_accounts);
        for index in 0..self.funded_accounts {
            let account = Address::random(&mut rng);
            chain
                .fund(account, self.initial_balance)
                .with_context(|| format!("funding genesis account {}", index))?;
            accounts.push(account);
        }

        Ok(TestNet { chain, accounts })
    }
}

impl Default for TestNetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
