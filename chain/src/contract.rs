//! Contract model: dynamic call values, the contract code trait and the
//! artifact registry.
//!
//! Contract logic is stateless; all state a contract owns lives in the
//! chain's per-address storage and is reached through [`CallContext`].
//! That split is what makes re-entrancy expressible: the same artifact can
//! be entered again while an outer frame is still executing.

use std::{collections::HashMap, sync::Arc};

use primitive_types::U256;
use serde::Serialize;
use swc_common::crypto::Address;

use crate::error::ChainError;

pub use crate::executor::CallContext;

/// Dynamic scalar passed to and returned from contract methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Value {
    Unit,
    Bool(bool),
    Uint(U256),
    Address(Address),
}

impl Value {
    pub fn as_uint(&self) -> Result<U256, ChainError> {
        match self {
            Value::Uint(v) => Ok(*v),
            other => Err(ChainError::InvalidArgument(format!(
                "expected uint, got {:?}",
                other
            ))),
        }
    }

    pub fn as_address(&self) -> Result<Address, ChainError> {
        match self {
            Value::Address(v) => Ok(*v),
            other => Err(ChainError::InvalidArgument(format!(
                "expected address, got {:?}",
                other
            ))),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ChainError> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(ChainError::InvalidArgument(format!(
                "expected bool, got {:?}",
                other
            ))),
        }
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Uint(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(U256::from(v))
    }
}

impl From<Address> for Value {
    fn from(v: Address) -> Self {
        Value::Address(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// Positional argument access for contract methods.
pub trait CallArgs {
    fn uint(&self, index: usize) -> Result<U256, ChainError>;
    fn address(&self, index: usize) -> Result<Address, ChainError>;
}

impl CallArgs for [Value] {
    fn uint(&self, index: usize) -> Result<U256, ChainError> {
        self.get(index)
            .ok_or_else(|| ChainError::InvalidArgument(format!("missing argument {}", index)))?
            .as_uint()
    }

    fn address(&self, index: usize) -> Result<Address, ChainError> {
        self.get(index)
            .ok_or_else(|| ChainError::InvalidArgument(format!("missing argument {}", index)))?
            .as_address()
    }
}

/// Logic of one contract artifact.
///
/// Only methods reachable through `call` are part of the contract's public
/// surface; anything the implementation keeps as plain Rust functions is
/// private, which is how the fixed visibility contracts hide their
/// internals.
pub trait ContractCode: Send + Sync {
    /// Runs once at deployment, with the deployment arguments.
    fn constructor(&self, _ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        Ok(())
    }

    /// Dispatch an exported method by name.
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError>;

    /// Invoked when the contract receives a plain value transfer (or an
    /// empty low-level call). Accepts by default; contracts that want to
    /// reject funding override this.
    fn receive(&self, _ctx: &mut CallContext<'_>) -> Result<(), ChainError> {
        Ok(())
    }
}

/// Artifact name to contract logic table. `Deploy(name)` instantiates fresh
/// chain-side storage bound to a new address; the logic itself is shared.
#[derive(Clone, Default)]
pub struct Registry {
    artifacts: HashMap<String, Arc<dyn ContractCode>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: ContractCode + 'static>(&mut self, name: &str, code: C) {
        self.artifacts.insert(name.to_string(), Arc::new(code));
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn ContractCode>, ChainError> {
        self.artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| ChainError::UnknownArtifact(name.to_string()))
    }
}
