//! In-process test chain for exercising contract vulnerability scenarios.
//!
//! The chain is a test instrument, not a consensus engine: there are no
//! blocks, signatures or mempool. A transaction is included the moment
//! [`TestChain::send`] resolves. What it does model faithfully:
//!
//! - account balances and nonces, mutated only by transaction execution
//! - contract deployment by artifact name, with chain-owned storage so a
//!   contract already on the call stack can be re-entered
//! - nested calls and value transfers between contracts, with per-frame
//!   rollback when an inner call reverts
//! - a deterministic gas schedule and a linear `gas_price * gas_used` fee
//!   charged to every transaction sender, reverted or not
//!
//! Every test builds its own chain; nothing persists across test cases.

pub mod chain;
pub mod contract;
pub mod error;
pub mod executor;
pub mod receipt;
pub mod state;

pub use chain::{TestChain, TxOptions};
pub use contract::{CallArgs, CallContext, ContractCode, Registry, Value};
pub use error::ChainError;
pub use receipt::TransactionReceipt;
pub use state::ChainState;
