// backend/src/domain/commands.rs

//! Domain-level result types.
//! These are produced by services inside the domain layer and are **not**
//! handed to the presentation layer directly. The console layer reads them
//! to decide which messages to print.

pub mod transfer {
    use crate::domain::models::account::AccountError;

    /// Outcome of both steps of a transfer.
    ///
    /// Each step records the resulting balance of the account it touched, or
    /// the reason it was rejected. A checked transfer only ever yields a
    /// receipt with both steps applied.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TransferReceipt {
        pub amount: f64,
        pub withdrawal: Result<f64, AccountError>,
        pub deposit: Result<f64, AccountError>,
    }

    impl TransferReceipt {
        /// True when money actually left the source and reached the destination
        pub fn is_complete(&self) -> bool {
            self.withdrawal.is_ok() && self.deposit.is_ok()
        }
    }
}
