// File: testing-framework/src/prelude.rs
//
// Convenient re-exports for test files.

pub use primitive_types::U256;

pub use swc_chain::{ChainError, TestChain, TransactionReceipt, TxOptions, Value};
pub use swc_common::{crypto::Address, utils::ether};

pub use crate::asserts::{expect_revert, expect_revert_unspecified, expect_unknown_method};
pub use crate::balance::{BalanceExpectation, BalanceProbe};
pub use crate::fixture::{TestNet, TestNetBuilder};
