//! The fixed demonstration script: two accounts, a deposit, a withdrawal and a transfer.

use std::io::Write;

use anyhow::Result;
use shared::LedgerConfig;
use tracing::info;

use crate::domain::models::account::Account;
use crate::io::console::ConsoleSession;

/// Run the demo, writing the transcript to `out`. Returns the final accounts.
pub fn run<W: Write>(out: W, config: LedgerConfig) -> Result<(Account, Account)> {
    let mut session = ConsoleSession::new(out, config);

    let mut savings = Account::savings(123, "John Doe", 1000.0, 0.02);
    let mut current = Account::current(456, "Jane Smith", 2000.0, 500.0);
    info!("Created accounts {} and {}", savings.account_number(), current.account_number());

    session.display(&savings)?;
    session.display(&current)?;

    session.deposit(&mut savings, 500.0)?;
    session.withdraw(&mut current, 1000.0)?;

    session.heading("Account Details after deposit and withdrawal:")?;
    session.display(&savings)?;
    session.display(&current)?;

    session.transfer(&mut savings, &mut current, 300.0)?;

    session.heading("Account Details after transfer:")?;
    session.display(&savings)?;
    session.display(&current)?;

    info!("Demo finished");
    Ok((savings, current))
}
