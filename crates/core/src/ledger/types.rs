//! Ledger domain types.

use chrono::NaiveDate;
use moneta_shared::types::{CategoryId, RecordId, TenantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scope::ProfilePartition;

/// Direction of a monetary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A category label joined onto a record by the row provider.
///
/// The name rides along with the id so category totals can be labeled
/// without a second lookup interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// One dated monetary row as supplied by the repository.
///
/// Immutable once fetched; the engine is read-only over ledger data.
/// `amount` is always non-negative; direction is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Unique identifier.
    pub id: RecordId,
    /// Tenant this row belongs to.
    pub tenant_id: TenantId,
    /// Personal/Business partition this row was recorded under.
    pub partition: ProfilePartition,
    /// Income or expense.
    pub kind: RecordKind,
    /// Category label, if any. `None` rolls up as "Uncategorized".
    pub category: Option<CategoryRef>,
    /// Monetary amount, >= 0. Decimal, never floating point.
    pub amount: Decimal,
    /// Calendar date the money moved.
    pub occurred_on: NaiveDate,
}

impl LedgerRecord {
    /// Returns the category name, if the record has one.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record_with_category(name: Option<&str>) -> LedgerRecord {
        LedgerRecord {
            id: RecordId::new(),
            tenant_id: TenantId::new(),
            partition: ProfilePartition::Personal,
            kind: RecordKind::Expense,
            category: name.map(|n| CategoryRef {
                id: CategoryId::new(),
                name: n.to_string(),
            }),
            amount: dec!(12.50),
            occurred_on: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_category_name_present() {
        let record = record_with_category(Some("Fuel"));
        assert_eq!(record.category_name(), Some("Fuel"));
    }

    #[test]
    fn test_category_name_absent() {
        let record = record_with_category(None);
        assert_eq!(record.category_name(), None);
    }

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::Income.to_string(), "income");
        assert_eq!(RecordKind::Expense.to_string(), "expense");
    }
}
