//! backend/src/io/mappers/account_mapper.rs

use crate::domain::models::account::{Account, AccountKind};
use shared::{AccountKindSnapshot, AccountSnapshot};

/// Mapper from domain accounts to shared snapshot DTOs.
pub struct AccountMapper;

impl AccountMapper {
    /// Capture the current display state of a domain account.
    pub fn to_dto(domain: &Account) -> AccountSnapshot {
        AccountSnapshot {
            account_number: domain.account_number(),
            holder: domain.holder().to_string(),
            balance: domain.balance(),
            kind: Self::kind_to_dto(domain.kind()),
        }
    }

    pub fn kind_to_dto(kind: &AccountKind) -> AccountKindSnapshot {
        match kind {
            AccountKind::Standard => AccountKindSnapshot::Standard,
            AccountKind::Savings { interest_rate } => AccountKindSnapshot::Savings {
                interest_rate: *interest_rate,
            },
            AccountKind::Current { overdraft_limit } => AccountKindSnapshot::Current {
                overdraft_limit: *overdraft_limit,
            },
        }
    }
}
