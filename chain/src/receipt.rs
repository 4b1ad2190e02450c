use primitive_types::U256;
use serde::Serialize;

use crate::contract::Value;

/// Outcome of one confirmed transaction.
#[derive(Clone, Debug, Serialize)]
pub struct TransactionReceipt {
    /// Total gas consumed, including every nested frame.
    pub gas_used: u64,
    /// Fee taken from the sender: `gas_used * gas_price`.
    pub fee: U256,
    /// Sender nonce this transaction consumed.
    pub nonce: u64,
    /// Return value of the top-level call.
    pub output: Value,
}
