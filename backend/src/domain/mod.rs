//! # Domain Module
//!
//! Business rules for the account ledger.
//!
//! This module owns the account model and everything that changes a balance.
//! It has no knowledge of how results are printed; the console layer in
//! [`crate::io`] turns outcomes into messages.
//!
//! ## Module Organization
//!
//! - **models**: `Account`, its variants and the `AccountError` taxonomy
//! - **transfer_service**: Withdraw-then-deposit transfers between two accounts
//! - **commands**: Result types shared between services and the console layer
//!
//! ## Business Rules
//!
//! - Deposits and withdrawals require a strictly positive amount
//! - A standard account cannot withdraw more than its balance
//! - A savings account must keep at least 100.00 after a withdrawal
//! - A current account may go negative down to its overdraft limit
//! - Interest rates are informational and never change a balance
//! - A rejected operation leaves every balance unchanged

pub mod commands;
pub mod models;
pub mod transfer_service;

pub use commands::*;
pub use models::*;
pub use transfer_service::*;
