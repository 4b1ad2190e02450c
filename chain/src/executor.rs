//! Transaction execution: call frames, gas charging and per-frame rollback.
//!
//! Every frame that can fail independently (nested call, value transfer,
//! low-level call) clones the state on entry and restores it on error, so a
//! contract can observe an inner failure without the chain keeping the
//! inner frame's side effects. Gas is never rolled back; a failed inner
//! call still cost its caller the gas it burned.

use log::trace;
use primitive_types::U256;
use swc_common::{
    config::{
        GAS_PER_DISPATCH, GAS_PER_STORAGE_READ, GAS_PER_STORAGE_WRITE, GAS_PER_VALUE_TRANSFER,
        MAX_CALL_DEPTH,
    },
    crypto::Address,
};

use crate::{
    contract::{Registry, Value},
    error::ChainError,
    state::ChainState,
};

/// Execution environment handed to contract code. One frame per contract
/// entry; nested frames reborrow the same state and gas counter.
pub struct CallContext<'a> {
    state: &'a mut ChainState,
    registry: &'a Registry,
    gas: &'a mut u64,
    depth: usize,
    sender: Address,
    this: Address,
    value: U256,
}

impl<'a> CallContext<'a> {
    pub(crate) fn root(
        state: &'a mut ChainState,
        registry: &'a Registry,
        gas: &'a mut u64,
        sender: Address,
        this: Address,
        value: U256,
    ) -> Self {
        Self {
            state,
            registry,
            gas,
            depth: 0,
            sender,
            this,
            value,
        }
    }

    /// Account that entered this frame: the transaction sender at the top
    /// level, the calling contract in nested frames.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Address of the contract currently executing.
    pub fn this(&self) -> Address {
        self.this
    }

    /// Value attached to this frame's call.
    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn self_balance(&self) -> U256 {
        self.state.balance(&self.this)
    }

    pub fn balance_of(&self, address: Address) -> U256 {
        self.state.balance(&address)
    }

    /// Read one of this contract's storage slots.
    pub fn storage_get(&mut self, key: &str) -> Option<Value> {
        self.charge(GAS_PER_STORAGE_READ);
        self.state.storage_get(&self.this, key).cloned()
    }

    /// Read a uint slot, zero when unset.
    pub fn get_uint(&mut self, key: &str) -> U256 {
        match self.storage_get(key) {
            Some(Value::Uint(value)) => value,
            _ => U256::zero(),
        }
    }

    /// Read an address slot, `None` when unset.
    pub fn get_address(&mut self, key: &str) -> Option<Address> {
        match self.storage_get(key) {
            Some(Value::Address(address)) => Some(address),
            _ => None,
        }
    }

    /// Write one of this contract's storage slots.
    pub fn storage_put(&mut self, key: &str, value: impl Into<Value>) {
        self.charge(GAS_PER_STORAGE_WRITE);
        self.state.storage_put(self.this, key, value.into());
    }

    /// Send value from this contract to `to`. When the recipient is a
    /// contract its receive hook runs, which may call back into the
    /// sender. On failure every side effect of the transfer (including the
    /// recipient's hook) is undone and the error is returned for the
    /// caller to handle or ignore.
    pub fn transfer(&mut self, to: Address, amount: U256) -> Result<(), ChainError> {
        self.charge(GAS_PER_VALUE_TRANSFER);
        let snapshot = self.state.clone();
        match self.transfer_inner(to, amount) {
            Ok(()) => Ok(()),
            Err(err) => {
                trace!("transfer of {} from {} reverted: {}", amount, self.this, err);
                *self.state = snapshot;
                Err(err)
            }
        }
    }

    fn transfer_inner(&mut self, to: Address, amount: U256) -> Result<(), ChainError> {
        let from = self.this;
        self.state.debit(&from, amount)?;
        self.state.credit(&to, amount)?;
        if let Some(artifact) = self.state.artifact_at(&to).map(str::to_owned) {
            let code = self.registry.get(&artifact)?;
            self.charge(GAS_PER_DISPATCH);
            let mut frame = self.enter(from, to, amount)?;
            code.receive(&mut frame)?;
        }
        Ok(())
    }

    /// Call a method on another contract, optionally attaching value. The
    /// callee's side effects are rolled back if it fails; the result is
    /// returned either way.
    pub fn call(
        &mut self,
        target: Address,
        method: &str,
        args: &[Value],
        value: U256,
    ) -> Result<Value, ChainError> {
        let snapshot = self.state.clone();
        match self.call_inner(target, method, args, value) {
            Ok(output) => Ok(output),
            Err(err) => {
                trace!("nested call {}::{} reverted: {}", target, method, err);
                *self.state = snapshot;
                Err(err)
            }
        }
    }

    fn call_inner(
        &mut self,
        target: Address,
        method: &str,
        args: &[Value],
        value: U256,
    ) -> Result<Value, ChainError> {
        let artifact = self
            .state
            .artifact_at(&target)
            .map(str::to_owned)
            .ok_or(ChainError::NoContract(target))?;
        let code = self.registry.get(&artifact)?;

        let from = self.this;
        if !value.is_zero() {
            self.charge(GAS_PER_VALUE_TRANSFER);
            self.state.debit(&from, value)?;
            self.state.credit(&target, value)?;
        }
        self.charge(GAS_PER_DISPATCH);
        let mut frame = self.enter(from, target, value)?;
        code.call(&mut frame, method, args)
    }

    /// Low-level call with no method and no value: runs the target's
    /// receive hook. Mirrors the bare `address.call()` the unchecked-return
    /// contracts are built around.
    pub fn raw_call(&mut self, target: Address) -> Result<(), ChainError> {
        let snapshot = self.state.clone();
        match self.raw_call_inner(target) {
            Ok(()) => Ok(()),
            Err(err) => {
                *self.state = snapshot;
                Err(err)
            }
        }
    }

    fn raw_call_inner(&mut self, target: Address) -> Result<(), ChainError> {
        let artifact = self
            .state
            .artifact_at(&target)
            .map(str::to_owned)
            .ok_or(ChainError::NoContract(target))?;
        let code = self.registry.get(&artifact)?;
        self.charge(GAS_PER_DISPATCH);
        let from = self.this;
        let mut frame = self.enter(from, target, U256::zero())?;
        code.receive(&mut frame)
    }

    fn enter(
        &mut self,
        sender: Address,
        this: Address,
        value: U256,
    ) -> Result<CallContext<'_>, ChainError> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(ChainError::CallDepthExceeded);
        }
        Ok(CallContext {
            state: &mut *self.state,
            registry: self.registry,
            gas: &mut *self.gas,
            depth: self.depth + 1,
            sender,
            this,
            value,
        })
    }

    fn charge(&mut self, amount: u64) {
        *self.gas = self.gas.saturating_add(amount);
    }
}

/// Top-level method call of a transaction. Moves the attached value from
/// the sender into the contract, then dispatches.
pub(crate) fn dispatch_call(
    state: &mut ChainState,
    registry: &Registry,
    gas: &mut u64,
    sender: Address,
    contract: Address,
    method: &str,
    args: &[Value],
    value: U256,
) -> Result<Value, ChainError> {
    let artifact = state
        .artifact_at(&contract)
        .map(str::to_owned)
        .ok_or(ChainError::NoContract(contract))?;
    let code = registry.get(&artifact)?;

    state.debit(&sender, value)?;
    state.credit(&contract, value)?;

    *gas = gas.saturating_add(GAS_PER_DISPATCH);
    let mut ctx = CallContext::root(state, registry, gas, sender, contract, value);
    code.call(&mut ctx, method, args)
}

/// Plain value transfer. Runs the recipient's receive hook when the
/// recipient is a contract.
pub(crate) fn dispatch_transfer(
    state: &mut ChainState,
    registry: &Registry,
    gas: &mut u64,
    from: Address,
    to: Address,
    amount: U256,
) -> Result<(), ChainError> {
    state.debit(&from, amount)?;
    state.credit(&to, amount)?;
    if let Some(artifact) = state.artifact_at(&to).map(str::to_owned) {
        let code = registry.get(&artifact)?;
        *gas = gas.saturating_add(GAS_PER_DISPATCH);
        let mut ctx = CallContext::root(state, registry, gas, from, to, amount);
        code.receive(&mut ctx)?;
    }
    Ok(())
}

/// Deployment: binds fresh storage to the new address and runs the
/// artifact's constructor with the attached value already credited.
pub(crate) fn dispatch_constructor(
    state: &mut ChainState,
    registry: &Registry,
    gas: &mut u64,
    sender: Address,
    contract: Address,
    artifact: &str,
    args: &[Value],
    value: U256,
) -> Result<(), ChainError> {
    let code = registry.get(artifact)?;

    state.register_contract(contract, artifact);
    state.debit(&sender, value)?;
    state.credit(&contract, value)?;

    let mut ctx = CallContext::root(state, registry, gas, sender, contract, value);
    code.constructor(&mut ctx, args)
}
