use primitive_types::U256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Balance overflow")]
    Overflow,

    #[error("Insufficient balance: need {need}, have {have}")]
    Insufficient { need: U256, have: U256 },
}
