//! # SWC Testing Framework
//!
//! Harness for the paired vulnerable/fixed contract suite. Three pieces:
//!
//! - [`TestNet`]: a fresh in-process chain per test with genesis-funded
//!   accounts and every suite artifact pre-registered
//! - [`BalanceProbe`]: the balance-delta verifier — snapshot an account,
//!   run one fee-paying action, assert the exact expected final balance
//! - revert assertions: exact reason-string matching for transactions a
//!   scenario expects the chain to reject
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swc_testing_framework::prelude::*;
//!
//! #[tokio::test]
//! async fn test_drain() {
//!     let net = TestNet::builder().with_funded_account_count(2).build().unwrap();
//!     let (funder, attacker) = (net.account(0), net.account(1));
//!     let drain = net.deploy("SimpleEtherDrain", &[], funder).await.unwrap();
//!     net.chain().transfer(funder, drain, ether(1)).await.unwrap();
//!
//!     let probe = BalanceProbe::snapshot(net.chain(), attacker).await;
//!     let receipt = net.chain().send(drain, "withdraw_all_anyone", &[], attacker).await.unwrap();
//!     probe
//!         .expect_gain(ether(1))
//!         .minus_fee(&receipt, net.chain().gas_price())
//!         .assert(net.chain())
//!         .await;
//! }
//! ```
//!
//! Failures are never retried or absorbed: a mismatched balance, an
//! unexpected rejection or an unexpected success each panic immediately
//! with the observed and expected outcome.

pub mod asserts;
pub mod balance;
pub mod fixture;
pub mod prelude;

pub use asserts::{expect_revert, expect_revert_unspecified, expect_unknown_method};
pub use balance::{BalanceExpectation, BalanceProbe};
pub use fixture::{TestNet, TestNetBuilder};

/// Framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
