use crate::error::{CatalogueError, Result};

/// Balance is only reachable through `deposit`, `withdraw` and `balance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    holder: String,
    balance: i64,
}

impl BankAccount {
    /// A negative opening balance is rejected as `InvalidAmount`.
    pub fn open(holder: impl Into<String>, initial: i64) -> Result<Self> {
        if initial < 0 {
            return Err(CatalogueError::InvalidAmount(initial));
        }
        Ok(Self { holder: holder.into(), balance: initial })
    }

    pub fn holder(&self) -> &str { &self.holder }
    pub fn balance(&self) -> i64 { self.balance }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(CatalogueError::InvalidAmount(amount));
        }
        self.balance = self.balance.checked_add(amount).ok_or(CatalogueError::Overflow)?;
        Ok(self.balance)
    }

    /// Returns the new balance. The balance never goes negative.
    pub fn withdraw(&mut self, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(CatalogueError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(CatalogueError::InsufficientFunds { requested: amount, available: self.balance });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
