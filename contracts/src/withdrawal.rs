//! SWC-105 Unprotected Ether Withdrawal.
//!
//! Two pairs: a drain whose withdrawal has no access control at all, and a
//! wallet whose "constructor" is an ordinary method anyone may re-invoke
//! to seize ownership.

use swc_chain::{CallArgs, CallContext, ChainError, ContractCode, Value};

fn require_owner(ctx: &mut CallContext<'_>, reason: &str) -> Result<(), ChainError> {
    match ctx.get_address("owner") {
        Some(owner) if owner == ctx.sender() => Ok(()),
        _ => Err(ChainError::revert(reason)),
    }
}

/// Accepts deposits from anyone and pays the whole pot to whoever asks.
pub struct SimpleEtherDrain;

impl ContractCode for SimpleEtherDrain {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "withdraw_all_anyone" => {
                let balance = ctx.self_balance();
                let caller = ctx.sender();
                ctx.transfer(caller, balance)?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct SimpleEtherDrainFixed;

impl ContractCode for SimpleEtherDrainFixed {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        let deployer = ctx.sender();
        ctx.storage_put("owner", deployer);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "withdraw_all_anyone" => {
                require_owner(ctx, "Only the owner can make withdrawals")?;
                let balance = ctx.self_balance();
                let caller = ctx.sender();
                ctx.transfer(caller, balance)?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// The initializer was meant to run once at deployment but is an exported
/// method: whoever calls it last owns the wallet.
pub struct WalletWrongConstructor;

impl ContractCode for WalletWrongConstructor {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "init_wallet" => {
                let caller = ctx.sender();
                ctx.storage_put("owner", caller);
                Ok(Value::Unit)
            }
            "migrate_to" => {
                require_owner(ctx, "Only the owner can migrate")?;
                let to = args.address(0)?;
                let balance = ctx.self_balance();
                ctx.transfer(to, balance)?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct WalletWrongConstructorFixed;

impl ContractCode for WalletWrongConstructorFixed {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        let deployer = ctx.sender();
        ctx.storage_put("owner", deployer);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            // No `init_wallet`: ownership is settled in the constructor
            // and cannot be reassigned.
            "migrate_to" => {
                require_owner(ctx, "Only the owner can migrate")?;
                let to = args.address(0)?;
                let balance = ctx.self_balance();
                ctx.transfer(to, balance)?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}
