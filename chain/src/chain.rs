//! Public chain surface used by tests: deploy, send, transfer, query.

use log::debug;
use parking_lot::RwLock;
use primitive_types::U256;
use swc_common::{
    config::{DEFAULT_GAS_PRICE, GAS_PER_DEPLOY, TX_BASE_GAS},
    crypto::{contract_address, Address},
};

use crate::{
    contract::{Registry, Value},
    error::ChainError,
    executor::{self, CallContext},
    receipt::TransactionReceipt,
    state::ChainState,
};

/// Sender and attached value of a transaction, the `{from, value}` options
/// of the wire-level call it mimics.
#[derive(Clone, Copy, Debug)]
pub struct TxOptions {
    pub from: Address,
    pub value: U256,
}

impl TxOptions {
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}

impl From<Address> for TxOptions {
    fn from(from: Address) -> Self {
        TxOptions {
            from,
            value: U256::zero(),
        }
    }
}

/// An in-process chain instance. One per test case; dropped with it.
pub struct TestChain {
    state: RwLock<ChainState>,
    registry: Registry,
    gas_price: U256,
}

impl TestChain {
    pub fn new(registry: Registry) -> Self {
        Self::with_gas_price(registry, U256::from(DEFAULT_GAS_PRICE))
    }

    pub fn with_gas_price(registry: Registry, gas_price: U256) -> Self {
        Self {
            state: RwLock::new(ChainState::new()),
            registry,
            gas_price,
        }
    }

    /// Chain-wide gas price. Fetched once per test group, multiplied by a
    /// receipt's `gas_used` to get the fee a sender paid.
    pub fn gas_price(&self) -> U256 {
        self.gas_price
    }

    /// Credit an account out of thin air. Genesis funding for fixtures;
    /// not reachable through any transaction path.
    pub fn fund(&self, address: Address, amount: U256) -> Result<(), ChainError> {
        self.state.write().credit(&address, amount)?;
        Ok(())
    }

    pub async fn balance(&self, address: Address) -> U256 {
        self.state.read().balance(&address)
    }

    pub async fn nonce(&self, address: Address) -> u64 {
        self.state.read().nonce(&address)
    }

    /// Deploy a registered artifact. Returns the address the instance
    /// landed at; the deployment fee is charged to `opts.from`.
    pub async fn deploy(
        &self,
        artifact: &str,
        args: &[Value],
        opts: impl Into<TxOptions>,
    ) -> Result<Address, ChainError> {
        let opts = opts.into();
        // Fail before consuming a nonce if the artifact name is bogus.
        self.registry.get(artifact)?;

        let mut state = self.state.write();
        let snapshot = state.clone();
        let nonce = state.bump_nonce(&opts.from);
        let address = contract_address(&opts.from, nonce);
        let mut gas = TX_BASE_GAS + GAS_PER_DEPLOY;

        let result = executor::dispatch_constructor(
            &mut state,
            &self.registry,
            &mut gas,
            opts.from,
            address,
            artifact,
            args,
            opts.value,
        )
        .map(|()| Value::Unit);

        self.settle(&mut state, snapshot, opts.from, nonce, gas, result)?;
        debug!("deployed {} at {} (deployer {})", artifact, address, opts.from);
        Ok(address)
    }

    /// Submit a method-call transaction and await its inclusion.
    pub async fn send(
        &self,
        contract: Address,
        method: &str,
        args: &[Value],
        opts: impl Into<TxOptions>,
    ) -> Result<TransactionReceipt, ChainError> {
        let opts = opts.into();
        let mut state = self.state.write();
        let snapshot = state.clone();
        let nonce = state.bump_nonce(&opts.from);
        let mut gas = TX_BASE_GAS;

        debug!(
            "tx from {}: {}::{} value {}",
            opts.from, contract, method, opts.value
        );
        let result = executor::dispatch_call(
            &mut state,
            &self.registry,
            &mut gas,
            opts.from,
            contract,
            method,
            args,
            opts.value,
        );

        self.settle(&mut state, snapshot, opts.from, nonce, gas, result)
    }

    /// Plain value transfer. Runs the recipient's receive hook when the
    /// recipient is a contract, so even a bare send can be rejected.
    pub async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ChainError> {
        let mut state = self.state.write();
        let snapshot = state.clone();
        let nonce = state.bump_nonce(&from);
        let mut gas = TX_BASE_GAS;

        let result =
            executor::dispatch_transfer(&mut state, &self.registry, &mut gas, from, to, amount)
                .map(|()| Value::Unit);

        self.settle(&mut state, snapshot, from, nonce, gas, result)
    }

    /// Read-only call: no fee, no nonce, and any state the method touches
    /// is discarded.
    pub async fn query(
        &self,
        contract: Address,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        let mut scratch = self.state.read().clone();
        let artifact = scratch
            .artifact_at(&contract)
            .map(str::to_owned)
            .ok_or(ChainError::NoContract(contract))?;
        let code = self.registry.get(&artifact)?;

        let mut gas = 0u64;
        let mut ctx = CallContext::root(
            &mut scratch,
            &self.registry,
            &mut gas,
            Address::zero(),
            contract,
            U256::zero(),
        );
        code.call(&mut ctx, method, args)
    }

    /// Close out a transaction: on success charge the fee, on failure
    /// restore the snapshot, keep the consumed nonce and still take the
    /// fee. Flakiness must surface, so errors propagate untouched.
    fn settle(
        &self,
        state: &mut ChainState,
        snapshot: ChainState,
        sender: Address,
        nonce: u64,
        gas_used: u64,
        result: Result<Value, ChainError>,
    ) -> Result<TransactionReceipt, ChainError> {
        let fee = U256::from(gas_used) * self.gas_price;
        match result {
            Ok(output) => {
                if let Err(err) = state.debit(&sender, fee) {
                    *state = snapshot;
                    state.bump_nonce(&sender);
                    state.debit_saturating(&sender, fee);
                    return Err(err.into());
                }
                debug!("tx confirmed: gas_used {} fee {}", gas_used, fee);
                Ok(TransactionReceipt {
                    gas_used,
                    fee,
                    nonce,
                    output,
                })
            }
            Err(err) => {
                debug!("tx failed, rolling back: {}", err);
                *state = snapshot;
                state.bump_nonce(&sender);
                state.debit_saturating(&sender, fee);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{CallArgs, ContractCode};

    /// Minimal stateful contract for exercising the execution machinery.
    struct Counter;

    impl ContractCode for Counter {
        fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
            ctx.storage_put("count", 0u64);
            Ok(())
        }

        fn call(
            &self,
            ctx: &mut CallContext<'_>,
            method: &str,
            args: &[Value],
        ) -> Result<Value, ChainError> {
            match method {
                "increment" => {
                    let count = ctx.get_uint("count");
                    ctx.storage_put("count", count + U256::one());
                    Ok(Value::Unit)
                }
                "count" => Ok(Value::Uint(ctx.get_uint("count"))),
                "boom" => {
                    // Mutate first so the test can observe the rollback.
                    ctx.storage_put("count", 999u64);
                    Err(ChainError::revert("boom"))
                }
                "forward" => {
                    let to = args.address(0)?;
                    let value = ctx.value();
                    ctx.transfer(to, value)?;
                    Ok(Value::Unit)
                }
                _ => Err(ChainError::unknown_method(ctx.this(), method)),
            }
        }
    }

    fn chain() -> TestChain {
        let mut registry = Registry::new();
        registry.register("Counter", Counter);
        TestChain::new(registry)
    }

    fn funded(chain: &TestChain, seed: u8) -> Address {
        let address = Address::new([seed; 20]);
        chain
            .fund(address, swc_common::utils::ether(100))
            .unwrap();
        address
    }

    #[tokio::test]
    async fn test_plain_transfer_charges_base_fee() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let bob = Address::new([2; 20]);

        let before = chain.balance(alice).await;
        let receipt = chain
            .transfer(alice, bob, swc_common::utils::ether(1))
            .await
            .unwrap();

        assert_eq!(receipt.gas_used, TX_BASE_GAS);
        assert_eq!(receipt.fee, U256::from(TX_BASE_GAS) * chain.gas_price());
        assert_eq!(
            chain.balance(alice).await,
            before - swc_common::utils::ether(1) - receipt.fee
        );
        assert_eq!(chain.balance(bob).await, swc_common::utils::ether(1));
    }

    #[tokio::test]
    async fn test_revert_rolls_back_everything_but_the_fee() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let counter = chain.deploy("Counter", &[], alice).await.unwrap();

        chain.send(counter, "increment", &[], alice).await.unwrap();
        let before = chain.balance(alice).await;
        let nonce_before = chain.nonce(alice).await;

        let err = chain
            .send(counter, "boom", &[], TxOptions::from(alice).with_value(U256::from(5u64)))
            .await
            .unwrap_err();
        assert_eq!(err.reason(), Some("boom"));

        // Storage write and value movement are gone; nonce and fee are not.
        let count = chain.query(counter, "count", &[]).await.unwrap();
        assert_eq!(count, Value::Uint(U256::one()));
        assert_eq!(chain.nonce(alice).await, nonce_before + 1);
        let after = chain.balance(alice).await;
        assert!(after < before);
        assert!(before - after < swc_common::utils::ether(1));
    }

    #[tokio::test]
    async fn test_unknown_method_is_not_a_revert() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let counter = chain.deploy("Counter", &[], alice).await.unwrap();

        let err = chain.send(counter, "nope", &[], alice).await.unwrap_err();
        assert!(matches!(err, ChainError::UnknownMethod { ref method, .. } if method == "nope"));
        assert!(!err.is_revert());
    }

    #[tokio::test]
    async fn test_query_is_free_and_pure() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let counter = chain.deploy("Counter", &[], alice).await.unwrap();

        let before = chain.balance(alice).await;
        let first = chain.query(counter, "count", &[]).await.unwrap();
        let second = chain.query(counter, "count", &[]).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(chain.balance(alice).await, before);
        assert_eq!(chain.nonce(alice).await, 1); // only the deploy
    }

    #[tokio::test]
    async fn test_deploy_unknown_artifact() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let err = chain.deploy("NoSuchThing", &[], alice).await.unwrap_err();
        assert!(matches!(err, ChainError::UnknownArtifact(_)));
        // Nothing was consumed by the refused deployment.
        assert_eq!(chain.nonce(alice).await, 0);
    }

    #[tokio::test]
    async fn test_contract_forwards_attached_value() {
        let chain = chain();
        let alice = funded(&chain, 1);
        let bob = Address::new([2; 20]);
        let counter = chain.deploy("Counter", &[], alice).await.unwrap();

        chain
            .send(
                counter,
                "forward",
                &[Value::Address(bob)],
                TxOptions::from(alice).with_value(swc_common::utils::ether(2)),
            )
            .await
            .unwrap();

        assert_eq!(chain.balance(bob).await, swc_common::utils::ether(2));
        assert_eq!(chain.balance(counter).await, U256::zero());
    }
}
