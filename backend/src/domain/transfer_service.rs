//! Transfers between two accounts.
//!
//! A transfer is a withdrawal from one account followed by a deposit into
//! another. Two behaviors are available:
//!
//! - [`transfer`] only deposits when the withdrawal succeeded and propagates
//!   the withdrawal error otherwise.
//! - [`transfer_unconditional`] withdraws, then deposits whatever the
//!   withdrawal outcome was. A rejected withdrawal therefore still credits
//!   the destination. This is the historical behavior, kept selectable via
//!   [`TransferMode::Unconditional`].

use shared::TransferMode;
use tracing::{debug, warn};

use crate::domain::commands::transfer::TransferReceipt;
use crate::domain::models::account::{Account, AccountError};

/// Move `amount` from `from` to `to`, touching `to` only if the withdrawal succeeds.
pub fn transfer(from: &mut Account, to: &mut Account, amount: f64) -> Result<TransferReceipt, AccountError> {
    let from_balance = from.withdraw(amount).map_err(|e| {
        warn!(from = from.account_number(), to = to.account_number(), amount, "Transfer aborted: {}", e);
        e
    })?;

    // The withdrawal already rejected non-positive amounts, so this cannot fail
    let to_balance = to.deposit(amount)?;

    debug!(from = from.account_number(), to = to.account_number(), amount, "Transfer completed");
    Ok(TransferReceipt {
        amount,
        withdrawal: Ok(from_balance),
        deposit: Ok(to_balance),
    })
}

/// Withdraw from `from` and deposit into `to` regardless of whether the withdrawal succeeded.
pub fn transfer_unconditional(from: &mut Account, to: &mut Account, amount: f64) -> TransferReceipt {
    let withdrawal = from.withdraw(amount);
    let deposit = to.deposit(amount);

    if withdrawal.is_err() && deposit.is_ok() {
        warn!(
            from = from.account_number(),
            to = to.account_number(),
            amount,
            "Unconditional transfer credited destination without debiting source"
        );
    }

    TransferReceipt {
        amount,
        withdrawal,
        deposit,
    }
}

/// Runs transfers according to the configured [`TransferMode`]
#[derive(Debug, Clone, Default)]
pub struct TransferService {
    mode: TransferMode,
}

impl TransferService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: TransferMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TransferMode {
        self.mode
    }

    /// In unconditional mode this never returns an error.
    pub fn execute(&self, from: &mut Account, to: &mut Account, amount: f64) -> Result<TransferReceipt, AccountError> {
        match self.mode {
            TransferMode::Checked => transfer(from, to, amount),
            TransferMode::Unconditional => Ok(transfer_unconditional(from, to, amount)),
        }
    }
}
