//! SWC-101 Integer Overflow and Underflow.
//!
//! Four pairs. The token sale accounts in uint8 and wraps; the three
//! `IntegerOverflow*` contracts are the minimal catalog reproductions of
//! unchecked 256-bit arithmetic. Fixed variants go through [`crate::safemath`].

use primitive_types::U256;
use swc_chain::{CallArgs, CallContext, ChainError, ContractCode, Value};

use crate::safemath;

fn token_balance_key(ctx: &CallContext<'_>) -> String {
    format!("token_balance.{}", ctx.sender())
}

/// Token sale pricing and balances in uint8. Buy tokens at `price` wei
/// apiece, sell them back. Both the cost check and the payout computation
/// wrap at 256.
pub struct TokenSaleChallenge;

impl ContractCode for TokenSaleChallenge {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("price", 1u64);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "buy" => {
                // Truncating the requested amount to 8 bits is the bug:
                // asking for 256 tokens asks for 0.
                let requested = args.uint(0)?.low_u64() as u8;
                let price = ctx.get_uint("price").low_u64() as u8;
                let cost = requested.wrapping_mul(price);
                if ctx.value() != U256::from(cost) {
                    return Err(ChainError::revert("buy: Require Statement"));
                }
                let key = token_balance_key(ctx);
                let held = ctx.get_uint(&key).low_u64() as u8;
                ctx.storage_put(&key, u64::from(held.wrapping_add(requested)));
                Ok(Value::Unit)
            }
            "sell" => {
                let requested = args.uint(0)?.low_u64() as u8;
                let key = token_balance_key(ctx);
                let held = ctx.get_uint(&key).low_u64() as u8;
                if held < requested {
                    return Err(ChainError::revert("sell: Require Statement"));
                }
                ctx.storage_put(&key, u64::from(held.wrapping_sub(requested)));
                // Payout wraps at 256: sell 128 tokens at price 2 and the
                // contract owes you nothing.
                let price = ctx.get_uint("price").low_u64() as u8;
                let payout = requested.wrapping_mul(price);
                let seller = ctx.sender();
                ctx.transfer(seller, U256::from(payout))?;
                Ok(Value::Unit)
            }
            "change_price" => {
                let price = args.uint(0)?.low_u64() as u8;
                ctx.storage_put("price", u64::from(price));
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct TokenSaleChallengeFixed;

impl ContractCode for TokenSaleChallengeFixed {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("price", 1u64);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "buy" => {
                // Cost check in full width first, then a checked narrowing
                // before the balance update.
                let requested = args.uint(0)?;
                let price = ctx.get_uint("price");
                let cost = safemath::mul(requested, price)?;
                if ctx.value() != cost {
                    return Err(ChainError::revert("buy: Require Statement"));
                }
                let requested = safemath::to_u8(requested)?;
                let key = token_balance_key(ctx);
                let held = safemath::to_u8(ctx.get_uint(&key))?;
                ctx.storage_put(&key, u64::from(safemath::add_u8(held, requested)?));
                Ok(Value::Unit)
            }
            "sell" => {
                let requested = safemath::to_u8(args.uint(0)?)?;
                let key = token_balance_key(ctx);
                let held = safemath::to_u8(ctx.get_uint(&key))?;
                let remaining = safemath::sub_u8(held, requested)?;
                ctx.storage_put(&key, u64::from(remaining));
                let price = safemath::to_u8(ctx.get_uint("price"))?;
                let payout = safemath::mul_u8(requested, price)?;
                let seller = ctx.sender();
                ctx.transfer(seller, U256::from(payout))?;
                Ok(Value::Unit)
            }
            "change_price" => {
                let price = safemath::to_u8(args.uint(0)?)?;
                ctx.storage_put("price", u64::from(price));
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// `map[k] -= v` with nothing ever written first: one call with (0, 1)
/// leaves `map[0]` at `U256::MAX`.
pub struct IntegerOverflowMappingSym1;

impl ContractCode for IntegerOverflowMappingSym1 {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "init" => {
                let key = format!("map.{}", args.uint(0)?);
                let current = ctx.get_uint(&key);
                let (wrapped, _) = current.overflowing_sub(args.uint(1)?);
                ctx.storage_put(&key, wrapped);
                Ok(Value::Unit)
            }
            "map" => {
                let key = format!("map.{}", args.uint(0)?);
                Ok(Value::Uint(ctx.get_uint(&key)))
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct IntegerOverflowMappingSym1Fixed;

impl ContractCode for IntegerOverflowMappingSym1Fixed {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "init" => {
                let key = format!("map.{}", args.uint(0)?);
                let current = ctx.get_uint(&key);
                ctx.storage_put(&key, safemath::sub(current, args.uint(1)?)?);
                Ok(Value::Unit)
            }
            "map" => {
                let key = format!("map.{}", args.uint(0)?);
                Ok(Value::Uint(ctx.get_uint(&key)))
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// A counter that starts at 1 and subtracts whatever it is given.
pub struct IntegerOverflowMinimal;

impl ContractCode for IntegerOverflowMinimal {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("count", 1u64);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "run" => {
                let count = ctx.get_uint("count");
                let (wrapped, _) = count.overflowing_sub(args.uint(0)?);
                ctx.storage_put("count", wrapped);
                Ok(Value::Unit)
            }
            "count" => Ok(Value::Uint(ctx.get_uint("count"))),
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct IntegerOverflowMinimalFixed;

impl ContractCode for IntegerOverflowMinimalFixed {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("count", 1u64);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "run" => {
                let count = ctx.get_uint("count");
                ctx.storage_put("count", safemath::sub(count, args.uint(0)?)?);
                Ok(Value::Unit)
            }
            "count" => Ok(Value::Uint(ctx.get_uint("count"))),
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

/// A counter seeded at 2^255; one doubling wraps it to zero.
pub struct IntegerOverflowMul;

impl ContractCode for IntegerOverflowMul {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("count", U256::one() << 255usize);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "run" => {
                let count = ctx.get_uint("count");
                let (wrapped, _) = count.overflowing_mul(args.uint(0)?);
                ctx.storage_put("count", wrapped);
                Ok(Value::Unit)
            }
            "count" => Ok(Value::Uint(ctx.get_uint("count"))),
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct IntegerOverflowMulFixed;

impl ContractCode for IntegerOverflowMulFixed {
    fn constructor(&self, ctx: &mut CallContext<'_>, _args: &[Value]) -> Result<(), ChainError> {
        ctx.storage_put("count", U256::one() << 255usize);
        Ok(())
    }

    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "run" => {
                let count = ctx.get_uint("count");
                ctx.storage_put("count", safemath::mul(count, args.uint(0)?)?);
                Ok(Value::Unit)
            }
            "count" => Ok(Value::Uint(ctx.get_uint("count"))),
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}
