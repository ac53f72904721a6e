//! Console formatting for accounts and operation outcomes.
//!
//! All text the program prints is produced here, from [`AccountSnapshot`]s
//! and operation results. Nothing in this module touches a balance, so
//! formatting the same snapshot twice always yields the same text.

use shared::{AccountKindSnapshot, AccountSnapshot, LedgerConfig};

use crate::domain::models::account::{AccountError, MINIMUM_SAVINGS_BALANCE};

/// Formats account details and operation messages using a [`LedgerConfig`]
#[derive(Debug, Clone)]
pub struct AccountFormatter {
    config: LedgerConfig,
}

impl AccountFormatter {
    pub fn new() -> Self {
        Self {
            config: LedgerConfig::default(),
        }
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Format a number with the configured fixed precision
    pub fn format_number(&self, value: f64) -> String {
        format!("{:.*}", self.config.decimal_places, value)
    }

    /// Format an amount as currency, e.g. "$1000.00" or "$-500.00"
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.config.currency_symbol, self.format_number(amount))
    }

    /// Detail block for an account, one line per field, each line newline-terminated
    pub fn display_details(&self, account: &AccountSnapshot) -> String {
        let indent = &self.config.detail_indent;
        let mut out = format!(
            "Account Details for Account (ID: {}):\n{}Holder: {}\n{}Balance: {}\n",
            account.account_number,
            indent,
            account.holder,
            indent,
            self.format_amount(account.balance)
        );

        match &account.kind {
            AccountKindSnapshot::Standard => {}
            AccountKindSnapshot::Savings { interest_rate } => {
                out.push_str(&format!(
                    "{}Interest Rate: {}%\n",
                    indent,
                    self.format_number(interest_rate * 100.0)
                ));
            }
            AccountKindSnapshot::Current { overdraft_limit } => {
                out.push_str(&format!(
                    "{}Overdraft Limit: {}\n",
                    indent,
                    self.format_amount(*overdraft_limit)
                ));
            }
        }

        out
    }

    pub fn deposit_message(&self, amount: f64, result: &Result<f64, AccountError>) -> String {
        match result {
            Ok(_) => format!("Deposit of {} successful.", self.format_amount(amount)),
            Err(_) => "Invalid deposit amount.".to_string(),
        }
    }

    /// Rejections are reported per account variant, not per error.
    pub fn withdrawal_message(&self, kind: &AccountKindSnapshot, amount: f64, result: &Result<f64, AccountError>) -> String {
        if result.is_ok() {
            return format!("Withdrawal of {} successful.", self.format_amount(amount));
        }

        match kind {
            AccountKindSnapshot::Standard => {
                "Invalid withdrawal amount or insufficient balance.".to_string()
            }
            AccountKindSnapshot::Savings { .. } => format!(
                "Invalid withdrawal amount or insufficient balance (minimum balance: {}).",
                self.format_amount(MINIMUM_SAVINGS_BALANCE)
            ),
            AccountKindSnapshot::Current { overdraft_limit } => format!(
                "Invalid withdrawal amount or exceeded overdraft limit (limit: {}).",
                self.format_amount(*overdraft_limit)
            ),
        }
    }

    pub fn transfer_message(&self, amount: f64, succeeded: bool) -> String {
        let outcome = if succeeded { "successful" } else { "failed" };
        format!("Transfer of {} {}.", self.format_amount(amount), outcome)
    }
}

impl Default for AccountFormatter {
    fn default() -> Self {
        Self::new()
    }
}
