//! SWC-104 Unchecked Call Return Value.
//!
//! `ReturnValue` performs a low-level call against a target whose fallback
//! always fails. One method drops the result on the floor, the other turns
//! it into a revert.

use swc_chain::{CallArgs, CallContext, ChainError, ContractCode, Value};

pub struct ReturnValue;

impl ContractCode for ReturnValue {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "call_not_checked" => {
                let target = args.address(0)?;
                // Result ignored: the failed call is rolled back but the
                // surrounding transaction carries on.
                let _ = ctx.raw_call(target);
                Ok(Value::Unit)
            }
            "call_checked" => {
                let target = args.address(0)?;
                ctx.raw_call(target)
                    .map_err(|_| ChainError::revert("Call Failed"))?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// Counterparty whose fallback rejects everything it is sent.
pub struct ReturnValueAttacker;

impl ContractCode for ReturnValueAttacker {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        Err(ChainError::unknown_method(ctx.this(), method))
    }

    fn receive(&self, _ctx: &mut CallContext<'_>) -> Result<(), ChainError> {
        Err(ChainError::revert("always fails"))
    }
}
