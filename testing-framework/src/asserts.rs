// File: testing-framework/src/asserts.rs
//
// Rejection assertions
//
// Scenarios that expect the chain to reject a transaction verify the
// rejection itself, never balances. Reason matching is exact, full-string
// and case-sensitive; a rejection with any other reason, or a success, is
// a test failure.

use std::fmt::Debug;

use swc_chain::ChainError;

/// The action must have been rejected with exactly `reason`.
#[track_caller]
pub fn expect_revert<T: Debug>(result: Result<T, ChainError>, reason: &str) {
    match result {
        Ok(value) => panic!(
            "expected revert '{}', but the transaction succeeded: {:?}",
            reason, value
        ),
        Err(ChainError::Revert { reason: actual }) => {
            assert_eq!(actual, reason, "transaction reverted with the wrong reason");
        }
        Err(other) => panic!("expected revert '{}', got: {}", reason, other),
    }
}

/// The action must have been rejected with a revert; the reason does not
/// matter.
#[track_caller]
pub fn expect_revert_unspecified<T: Debug>(result: Result<T, ChainError>) {
    match result {
        Ok(value) => panic!("expected a revert, but the transaction succeeded: {:?}", value),
        Err(err) if err.is_revert() => {}
        Err(other) => panic!("expected a revert, got: {}", other),
    }
}

/// The action must have failed because the contract does not export the
/// method at all — the outcome of calling what the fixed contracts made
/// private.
#[track_caller]
pub fn expect_unknown_method<T: Debug>(result: Result<T, ChainError>, method: &str) {
    match result {
        Ok(value) => panic!(
            "expected '{}' to be unreachable, but the call succeeded: {:?}",
            method, value
        ),
        Err(ChainError::UnknownMethod { method: actual, .. }) => {
            assert_eq!(actual, method, "a different method was reported unknown");
        }
        Err(other) => panic!("expected '{}' to be unreachable, got: {}", method, other),
    }
}
