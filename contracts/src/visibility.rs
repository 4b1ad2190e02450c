//! SWC-100 Function Default Visibility.
//!
//! A guessing-game contract pays its pot to the winner through an internal
//! helper. The vulnerable variant leaves the helper externally callable,
//! so anyone can claim the pot directly.

use swc_chain::{CallContext, ChainError, ContractCode, Value};
use swc_common::crypto::Address;

/// Only addresses whose low four bytes are zero count as winners. Nobody
/// is expected to hold one; the pot is meant to be unreachable.
fn is_winning_address(address: &Address) -> bool {
    address.as_bytes()[16..].iter().all(|b| *b == 0)
}

fn send_winnings(ctx: &mut CallContext<'_>, to: Address) -> Result<(), ChainError> {
    let pot = ctx.self_balance();
    ctx.transfer(to, pot)
}

pub struct HashForEtherVisibilityNotSet;

impl ContractCode for HashForEtherVisibilityNotSet {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "withdraw_winnings" => {
                if !is_winning_address(&ctx.sender()) {
                    return Err(ChainError::revert("Caller is not a winner"));
                }
                let winner = ctx.sender();
                send_winnings(ctx, winner)?;
                Ok(Value::Unit)
            }
            // The helper was meant to be internal but is exported: the
            // winner check above is a fence anyone can walk around.
            "_send_winnings" => {
                let caller = ctx.sender();
                send_winnings(ctx, caller)?;
                Ok(Value::Unit)
            }
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}

pub struct HashForEtherVisibilityNotSetFixed;

impl ContractCode for HashForEtherVisibilityNotSetFixed {
    fn call(
        &self,
        ctx: &mut CallContext<'_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, ChainError> {
        match method {
            "withdraw_winnings" => {
                if !is_winning_address(&ctx.sender()) {
                    return Err(ChainError::revert("Caller is not a winner"));
                }
                let winner = ctx.sender();
                send_winnings(ctx, winner)?;
                Ok(Value::Unit)
            }
            // No `_send_winnings` arm: the helper is a private function
            // now, unreachable from outside.
            _ => Err(ChainError::unknown_method(ctx.this(), method)),
        }
    }
}
