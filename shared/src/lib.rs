use serde::{Deserialize, Serialize};

/// Read-only view of an account, as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_number: u32,
    pub holder: String,
    /// Balance at the time the snapshot was taken
    pub balance: f64,
    pub kind: AccountKindSnapshot,
}

/// Variant-specific data carried by a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKindSnapshot {
    /// Plain account with no extra terms
    Standard,
    /// Savings account; the rate is a fraction (0.02 = 2%)
    Savings { interest_rate: f64 },
    /// Current account that may go negative down to `-overdraft_limit`
    Current { overdraft_limit: f64 },
}

/// How a transfer treats a rejected withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    /// Deposit only when the withdrawal succeeded
    #[default]
    Checked,
    /// Withdraw then deposit regardless of the withdrawal outcome, always reporting success
    Unconditional,
}

/// Presentation and transfer settings for the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub currency_symbol: String,
    pub decimal_places: usize,
    /// Prefix for the indented lines of an account detail block
    pub detail_indent: String,
    pub transfer_mode: TransferMode,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_places: 2,
            detail_indent: "   ".to_string(),
            transfer_mode: TransferMode::Checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.detail_indent, "   ");
        assert_eq!(config.transfer_mode, TransferMode::Checked);
    }

    #[test]
    fn test_snapshot_kind_is_tagged() {
        let snapshot = AccountSnapshot {
            account_number: 123,
            holder: "John Doe".to_string(),
            balance: 1000.0,
            kind: AccountKindSnapshot::Savings { interest_rate: 0.02 },
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["kind"]["type"], "savings");
        assert_eq!(json["kind"]["interest_rate"], 0.02);
        assert_eq!(json["account_number"], 123);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LedgerConfig = serde_json::from_str(r#"{"transfer_mode":"unconditional"}"#).unwrap();
        assert_eq!(config.transfer_mode, TransferMode::Unconditional);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.decimal_places, 2);
    }
}
