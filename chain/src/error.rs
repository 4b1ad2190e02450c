use swc_common::{crypto::Address, error::BalanceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    /// The transaction was rejected by contract code and fully rolled back.
    #[error("revert: {reason}")]
    Revert { reason: String },

    /// The target contract does not export the requested method.
    #[error("unknown method '{method}' on contract {contract}")]
    UnknownMethod { contract: Address, method: String },

    #[error("unknown contract artifact '{0}'")]
    UnknownArtifact(String),

    #[error("no contract deployed at {0}")]
    NoContract(Address),

    #[error("call depth limit exceeded")]
    CallDepthExceeded,

    #[error("invalid call argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

impl ChainError {
    pub fn revert(reason: impl Into<String>) -> Self {
        ChainError::Revert {
            reason: reason.into(),
        }
    }

    pub fn unknown_method(contract: Address, method: &str) -> Self {
        ChainError::UnknownMethod {
            contract,
            method: method.to_string(),
        }
    }

    pub fn is_revert(&self) -> bool {
        matches!(self, ChainError::Revert { .. })
    }

    /// Revert reason, if this error is a revert.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ChainError::Revert { reason } => Some(reason),
            _ => None,
        }
    }
}
