//! Console session: runs account operations and reports each outcome.
//!
//! Domain operations return `Result`s; this is the one place where a rejected
//! operation becomes a printed message. The session then carries on, so a
//! failure only ends the operation that produced it.

use std::io::Write;

use anyhow::{Context, Result};
use shared::LedgerConfig;
use tracing::debug;

use super::formatter::AccountFormatter;
use crate::domain::models::account::Account;
use crate::domain::transfer_service::TransferService;
use crate::io::mappers::AccountMapper;

pub struct ConsoleSession<W: Write> {
    out: W,
    formatter: AccountFormatter,
    transfer_service: TransferService,
}

impl<W: Write> ConsoleSession<W> {
    pub fn new(out: W, config: LedgerConfig) -> Self {
        let transfer_service = TransferService::with_mode(config.transfer_mode);
        Self {
            out,
            formatter: AccountFormatter::with_config(config),
            transfer_service,
        }
    }

    /// Consume the session and hand back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).context("Failed to write to console")
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        self.print_line(text)
    }

    pub fn display(&mut self, account: &Account) -> Result<()> {
        let details = self.formatter.display_details(&AccountMapper::to_dto(account));
        self.out
            .write_all(details.as_bytes())
            .context("Failed to write account details")
    }

    /// Returns whether the deposit was applied
    pub fn deposit(&mut self, account: &mut Account, amount: f64) -> Result<bool> {
        let result = account.deposit(amount);
        let message = self.formatter.deposit_message(amount, &result);
        self.print_line(&message)?;
        Ok(result.is_ok())
    }

    /// Returns whether the withdrawal was applied
    pub fn withdraw(&mut self, account: &mut Account, amount: f64) -> Result<bool> {
        let kind = AccountMapper::kind_to_dto(account.kind());
        let result = account.withdraw(amount);
        let message = self.formatter.withdrawal_message(&kind, amount, &result);
        self.print_line(&message)?;
        Ok(result.is_ok())
    }

    /// Returns whether the transfer was reported as successful.
    ///
    /// In unconditional mode every transfer is reported as successful, even
    /// when the withdrawal step was rejected.
    pub fn transfer(&mut self, from: &mut Account, to: &mut Account, amount: f64) -> Result<bool> {
        let from_kind = AccountMapper::kind_to_dto(from.kind());

        match self.transfer_service.execute(from, to, amount) {
            Ok(receipt) => {
                let withdrawal = self.formatter.withdrawal_message(&from_kind, amount, &receipt.withdrawal);
                let deposit = self.formatter.deposit_message(amount, &receipt.deposit);
                self.print_line(&withdrawal)?;
                self.print_line(&deposit)?;

                debug!(complete = receipt.is_complete(), "Transfer reported as successful");
                let message = self.formatter.transfer_message(amount, true);
                self.print_line(&message)?;
                Ok(true)
            }
            Err(e) => {
                let withdrawal = self.formatter.withdrawal_message(&from_kind, amount, &Err(e));
                self.print_line(&withdrawal)?;

                let message = self.formatter.transfer_message(amount, false);
                self.print_line(&message)?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransferMode;

    fn session(mode: TransferMode) -> ConsoleSession<Vec<u8>> {
        ConsoleSession::new(
            Vec::new(),
            LedgerConfig {
                transfer_mode: mode,
                ..LedgerConfig::default()
            },
        )
    }

    fn output(session: ConsoleSession<Vec<u8>>) -> String {
        String::from_utf8(session.into_inner()).unwrap()
    }

    #[test]
    fn test_rejected_operations_print_and_continue() {
        let mut session = session(TransferMode::Checked);
        let mut savings = Account::savings(123, "John Doe", 1000.0, 0.02);
        let mut current = Account::current(456, "Jane Smith", 0.0, 500.0);

        assert!(!session.deposit(&mut savings, 0.0).unwrap());
        assert!(!session.withdraw(&mut savings, 950.0).unwrap());
        assert!(!session.withdraw(&mut current, 501.0).unwrap());
        assert!(session.withdraw(&mut current, 500.0).unwrap());

        assert_eq!(savings.balance(), 1000.0);
        assert_eq!(current.balance(), -500.0);
        assert_eq!(
            output(session),
            "Invalid deposit amount.\n\
             Invalid withdrawal amount or insufficient balance (minimum balance: $100.00).\n\
             Invalid withdrawal amount or exceeded overdraft limit (limit: $500.00).\n\
             Withdrawal of $500.00 successful.\n"
        );
    }

    #[test]
    fn test_checked_transfer_failure_is_reported() {
        let mut session = session(TransferMode::Checked);
        let mut savings = Account::savings(123, "John Doe", 150.0, 0.02);
        let mut current = Account::current(456, "Jane Smith", 1000.0, 500.0);

        assert!(!session.transfer(&mut savings, &mut current, 100.0).unwrap());

        assert_eq!(savings.balance(), 150.0);
        assert_eq!(current.balance(), 1000.0);
        assert_eq!(
            output(session),
            "Invalid withdrawal amount or insufficient balance (minimum balance: $100.00).\n\
             Transfer of $100.00 failed.\n"
        );
    }

    #[test]
    fn test_unconditional_transfer_reports_success_after_rejected_withdrawal() {
        let mut session = session(TransferMode::Unconditional);
        let mut savings = Account::savings(123, "John Doe", 150.0, 0.02);
        let mut current = Account::current(456, "Jane Smith", 1000.0, 500.0);

        assert!(session.transfer(&mut savings, &mut current, 100.0).unwrap());

        // Historical behavior: destination credited although the source was not debited
        assert_eq!(savings.balance(), 150.0);
        assert_eq!(current.balance(), 1100.0);
        assert_eq!(
            output(session),
            "Invalid withdrawal amount or insufficient balance (minimum balance: $100.00).\n\
             Deposit of $100.00 successful.\n\
             Transfer of $100.00 successful.\n"
        );
    }

    #[test]
    fn test_display_does_not_mutate() {
        let mut session = session(TransferMode::Checked);
        let account = Account::standard(9, "Base", 42.0);

        session.display(&account).unwrap();
        session.display(&account).unwrap();

        assert_eq!(account.balance(), 42.0);
        let text = output(session);
        let (first, second) = text.split_at(text.len() / 2);
        assert_eq!(first, second);
    }
}
