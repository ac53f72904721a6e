//! # Bank Ledger
//!
//! In-memory model of savings and current accounts with deposits,
//! withdrawals and transfers, printed to the console.
//!
//! ## Architecture
//!
//! ```text
//! main / demo script
//!     ↓
//! IO Layer (console session, formatting, mappers)
//!     ↓
//! Domain Layer (accounts, withdrawal policies, transfers)
//! ```
//!
//! Everything runs once, single-threaded, with no persistence.

pub mod demo;
pub mod domain;
pub mod io;

pub use domain::*;
pub use io::*;
