//! Property-based tests for category aggregation.

use chrono::NaiveDate;
use moneta_shared::types::{CategoryId, RecordId, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::CategoryAggregator;
use crate::ledger::{CategoryRef, LedgerRecord, RecordKind};
use crate::scope::ProfilePartition;

prop_compose! {
    /// A record with a small category universe so collisions are common.
    fn arb_record()(
        cents in 0i64..1_000_000,
        category_slot in 0usize..6,
        is_income in any::<bool>(),
        day in 1u32..=28,
    ) -> LedgerRecord {
        let names = ["Salary", "Rent", "Groceries", "Fuel", "Insurance"];
        LedgerRecord {
            id: RecordId::new(),
            tenant_id: TenantId::new(),
            partition: ProfilePartition::Personal,
            kind: if is_income { RecordKind::Income } else { RecordKind::Expense },
            category: names.get(category_slot).map(|name| CategoryRef {
                id: CategoryId::new(),
                name: (*name).to_string(),
            }),
            amount: Decimal::new(cents, 2),
            occurred_on: NaiveDate::from_ymd_opt(2026, 7, day).unwrap(),
        }
    }
}

proptest! {
    /// Conservation: the category totals of a kind sum exactly (Decimal
    /// equality, no epsilon) to the record sum of that kind. No record
    /// dropped, none double-counted.
    #[test]
    fn test_totals_conserve_the_record_sum(records in prop::collection::vec(arb_record(), 0..50)) {
        for kind in [RecordKind::Income, RecordKind::Expense] {
            let expected: Decimal = records
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| r.amount)
                .sum();

            let totals = CategoryAggregator::aggregate(&records, kind);
            let actual: Decimal = totals.iter().map(|t| t.total).sum();

            prop_assert_eq!(actual, expected);
        }
    }

    /// Ordering is total and deterministic: aggregating twice yields the
    /// identical sequence.
    #[test]
    fn test_aggregation_is_reproducible(records in prop::collection::vec(arb_record(), 0..50)) {
        let first = CategoryAggregator::aggregate(&records, RecordKind::Expense);
        let second = CategoryAggregator::aggregate(&records, RecordKind::Expense);
        prop_assert_eq!(first, second);
    }

    /// Sort order is descending by total with name ascending on ties.
    #[test]
    fn test_sort_order_invariant(records in prop::collection::vec(arb_record(), 0..50)) {
        let totals = CategoryAggregator::aggregate(&records, RecordKind::Income);

        for pair in totals.windows(2) {
            let ordered = pair[0].total > pair[1].total
                || (pair[0].total == pair[1].total && pair[0].name < pair[1].name);
            prop_assert!(ordered);
        }
    }
}
