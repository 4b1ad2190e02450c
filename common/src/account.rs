use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::BalanceError;

/// Balance and nonce of a single address. The chain state owns one of these
/// per account that has ever held funds or sent a transaction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Account {
    pub balance: U256,
    pub nonce: u64,
}

impl Account {
    pub fn with_balance(balance: U256) -> Self {
        Self { balance, nonce: 0 }
    }

    pub fn credit(&mut self, amount: U256) -> Result<(), BalanceError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BalanceError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: U256) -> Result<(), BalanceError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BalanceError::Insufficient {
                need: amount,
                have: self.balance,
            })?;
        Ok(())
    }
}
