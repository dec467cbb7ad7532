//! Category rollup types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::RecordKind;

/// Sentinel bucket for records with no resolvable category.
///
/// It participates in sorting like any other category and is never
/// silently dropped.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Chart palette for category identity. Colors are assigned by the
/// category's final sorted ordinal, wrapping, so identical inputs always
/// produce identical colors.
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Rolled-up total for one category within a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category display name, or [`UNCATEGORIZED`].
    pub name: String,
    /// Income or expense.
    pub kind: RecordKind,
    /// Exact Decimal sum of the category's records.
    pub total: Decimal,
    /// Deterministically assigned chart color.
    pub color: String,
}
