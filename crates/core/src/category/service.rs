//! Category aggregation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{CategoryTotal, PALETTE, UNCATEGORIZED};
use crate::ledger::{LedgerRecord, RecordKind};

/// Folds records into per-category totals with a stable, testable order.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Aggregates all records of `kind` into category totals.
    ///
    /// Records without a resolvable category roll into a single
    /// [`UNCATEGORIZED`] total. Accumulation is exact Decimal
    /// arithmetic; conservation holds to exact equality: the totals sum
    /// to the input sum of that kind, nothing dropped, nothing counted
    /// twice.
    ///
    /// Ordering is descending by total, ties broken by name ascending.
    /// Colors are assigned from the palette by final ordinal, so the
    /// whole result is a pure function of its input.
    #[must_use]
    pub fn aggregate(records: &[LedgerRecord], kind: RecordKind) -> Vec<CategoryTotal> {
        // BTreeMap keeps name order deterministic before the sort below.
        let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();

        for record in records.iter().filter(|r| r.kind == kind) {
            let name = record.category_name().unwrap_or(UNCATEGORIZED);
            *sums.entry(name).or_insert(Decimal::ZERO) += record.amount;
        }

        let mut totals: Vec<(String, Decimal)> = sums
            .into_iter()
            .map(|(name, total)| (name.to_string(), total))
            .collect();

        // Descending by amount, then ascending by name on ties.
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        totals
            .into_iter()
            .enumerate()
            .map(|(ordinal, (name, total))| CategoryTotal {
                name,
                kind,
                total,
                color: PALETTE[ordinal % PALETTE.len()].to_string(),
            })
            .collect()
    }
}
