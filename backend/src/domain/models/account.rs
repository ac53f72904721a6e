//! Domain model for a bank account and its withdrawal policies.
use tracing::{debug, warn};

/// Floor below which a savings withdrawal is rejected.
pub const MINIMUM_SAVINGS_BALANCE: f64 = 100.0;

pub type AccountNumber = u32;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("Insufficient funds: balance {balance} is less than {amount}")]
    InsufficientFunds { balance: f64, amount: f64 },
    #[error("Withdrawal would leave the balance below the minimum of {minimum}")]
    BelowMinimumBalance { minimum: f64 },
    #[error("Withdrawal would exceed the overdraft limit of {limit}")]
    ExceedsOverdraftLimit { limit: f64 },
}

/// Account variant; decides which withdrawal policy applies.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Standard,
    /// Interest rate is display-only and never applied to the balance
    Savings { interest_rate: f64 },
    Current { overdraft_limit: f64 },
}

impl AccountKind {
    /// Check whether `amount` may be withdrawn from `balance` under this variant's policy
    pub fn check_withdrawal(&self, balance: f64, amount: f64) -> Result<(), AccountError> {
        if !(amount > 0.0) {
            return Err(AccountError::InvalidAmount { amount });
        }

        match self {
            AccountKind::Standard => {
                if balance >= amount {
                    Ok(())
                } else {
                    Err(AccountError::InsufficientFunds { balance, amount })
                }
            }
            AccountKind::Savings { .. } => {
                if balance - amount >= MINIMUM_SAVINGS_BALANCE {
                    Ok(())
                } else {
                    Err(AccountError::BelowMinimumBalance {
                        minimum: MINIMUM_SAVINGS_BALANCE,
                    })
                }
            }
            AccountKind::Current { overdraft_limit } => {
                if balance - amount >= -overdraft_limit {
                    Ok(())
                } else {
                    Err(AccountError::ExceedsOverdraftLimit {
                        limit: *overdraft_limit,
                    })
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Savings { .. } => "savings",
            AccountKind::Current { .. } => "current",
        }
    }
}

/// A bank account. The balance only changes through `deposit` and `withdraw`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    holder: String,
    balance: f64,
    kind: AccountKind,
}

impl Account {
    pub fn new(account_number: AccountNumber, holder: impl Into<String>, initial_balance: f64, kind: AccountKind) -> Self {
        Self {
            account_number,
            holder: holder.into(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn standard(account_number: AccountNumber, holder: impl Into<String>, initial_balance: f64) -> Self {
        Self::new(account_number, holder, initial_balance, AccountKind::Standard)
    }

    pub fn savings(account_number: AccountNumber, holder: impl Into<String>, initial_balance: f64, interest_rate: f64) -> Self {
        Self::new(account_number, holder, initial_balance, AccountKind::Savings { interest_rate })
    }

    pub fn current(account_number: AccountNumber, holder: impl Into<String>, initial_balance: f64, overdraft_limit: f64) -> Self {
        Self::new(account_number, holder, initial_balance, AccountKind::Current { overdraft_limit })
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Add a positive amount to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if !(amount > 0.0) {
            warn!(account = self.account_number, amount, "Rejected deposit: amount must be positive");
            return Err(AccountError::InvalidAmount { amount });
        }

        self.balance += amount;
        debug!(account = self.account_number, amount, balance = self.balance, "Deposit applied");
        Ok(self.balance)
    }

    /// Remove an amount from the balance if the account's policy allows it. Returns the new balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        if let Err(e) = self.kind.check_withdrawal(self.balance, amount) {
            warn!(account = self.account_number, kind = self.kind.as_str(), amount, error = %e, "Rejected withdrawal");
            return Err(e);
        }

        self.balance -= amount;
        debug!(account = self.account_number, amount, balance = self.balance, "Withdrawal applied");
        Ok(self.balance)
    }
}
