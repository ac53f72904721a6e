//! # IO Module
//!
//! Interface layer between the account ledger and the terminal.
//!
//! The domain never prints. This layer maps domain accounts to the
//! [`shared::AccountSnapshot`] DTO, formats snapshots and operation outcomes
//! as text, and writes that text to any `std::io::Write`.
//!
//! - **mappers**: Domain `Account` to shared snapshot conversion
//! - **console**: Fixed-precision formatting and the console session

pub mod console;
pub mod mappers;

pub use console::*;
pub use mappers::*;
