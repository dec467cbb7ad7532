//! Period bucketizer service.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use super::error::WindowError;
use super::types::Bucket;
use crate::ledger::LedgerRecord;

/// Maps dated records onto a contiguous sequence of calendar-month buckets.
pub struct PeriodBucketizer;

impl PeriodBucketizer {
    /// Builds the window of `months` calendar months ending at the month
    /// containing `anchor`, inclusive.
    ///
    /// The window always exists in full, even when every month but the
    /// anchor month has no data. Buckets come back contiguous,
    /// non-overlapping, and ascending.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Empty`] for a zero-month window, before any
    /// I/O is attempted, and [`WindowError::OutOfRange`] if the window
    /// would step outside the representable calendar range.
    pub fn window(anchor: NaiveDate, months: u32) -> Result<Vec<Bucket>, WindowError> {
        if months == 0 {
            return Err(WindowError::Empty);
        }

        let out_of_range = || WindowError::OutOfRange { anchor, months };

        let anchor_month = month_start(anchor);
        let window_start = anchor_month
            .checked_sub_months(Months::new(months - 1))
            .ok_or_else(out_of_range)?;

        let mut buckets = Vec::with_capacity(months as usize);
        for offset in 0..months {
            let start = window_start
                .checked_add_months(Months::new(offset))
                .ok_or_else(out_of_range)?;
            let end = start
                .checked_add_months(Months::new(1))
                .ok_or_else(out_of_range)?;

            buckets.push(Bucket {
                label: start.format("%Y-%m").to_string(),
                start,
                end,
            });
        }

        Ok(buckets)
    }

    /// Assigns each record to at most one bucket.
    ///
    /// The result is index-aligned with `buckets`. Records dated outside
    /// every bucket are excluded here: the window is a display window,
    /// not a data-completeness guarantee. Callers that need all-time
    /// totals compute them from the unbucketized record set.
    #[must_use]
    pub fn assign<'a>(
        buckets: &[Bucket],
        records: &'a [LedgerRecord],
    ) -> Vec<Vec<&'a LedgerRecord>> {
        let mut assigned: Vec<Vec<&LedgerRecord>> = vec![Vec::new(); buckets.len()];

        for record in records {
            if let Some(index) = buckets
                .iter()
                .position(|bucket| bucket.contains_date(record.occurred_on))
            {
                assigned[index].push(record);
            }
        }

        assigned
    }

    /// Sums record amounts per bucket, index-aligned with `buckets`.
    #[must_use]
    pub fn totals(buckets: &[Bucket], records: &[LedgerRecord]) -> Vec<Decimal> {
        Self::assign(buckets, records)
            .iter()
            .map(|bucket_records| bucket_records.iter().map(|r| r.amount).sum())
            .collect()
    }
}

/// First day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    // with_day(1) cannot fail: day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_shared::types::{RecordId, TenantId};
    use rust_decimal_macros::dec;

    use crate::ledger::RecordKind;
    use crate::scope::ProfilePartition;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_on(date: NaiveDate, amount: Decimal) -> LedgerRecord {
        LedgerRecord {
            id: RecordId::new(),
            tenant_id: TenantId::new(),
            partition: ProfilePartition::Personal,
            kind: RecordKind::Expense,
            category: None,
            amount,
            occurred_on: date,
        }
    }

    #[test]
    fn test_window_ends_at_anchor_month() {
        let buckets = PeriodBucketizer::window(ymd(2026, 6, 17), 3).unwrap();

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].label, "2026-04");
        assert_eq!(buckets[1].label, "2026-05");
        assert_eq!(buckets[2].label, "2026-06");
        assert_eq!(buckets[2].start, ymd(2026, 6, 1));
        assert_eq!(buckets[2].end, ymd(2026, 7, 1));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let buckets = PeriodBucketizer::window(ymd(2026, 2, 1), 4).unwrap();

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn test_window_of_one_is_just_the_anchor_month() {
        let buckets = PeriodBucketizer::window(ymd(2026, 12, 31), 1).unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start, ymd(2026, 12, 1));
        assert_eq!(buckets[0].end, ymd(2027, 1, 1));
    }

    #[test]
    fn test_zero_month_window_is_rejected() {
        let result = PeriodBucketizer::window(ymd(2026, 6, 1), 0);
        assert!(matches!(result, Err(WindowError::Empty)));
    }

    #[test]
    fn test_first_and_last_day_of_month_share_a_bucket() {
        let buckets = PeriodBucketizer::window(ymd(2026, 3, 15), 2).unwrap();
        let records = vec![
            record_on(ymd(2026, 3, 1), dec!(10)),
            record_on(ymd(2026, 3, 31), dec!(20)),
        ];

        let assigned = PeriodBucketizer::assign(&buckets, &records);

        assert!(assigned[0].is_empty());
        assert_eq!(assigned[1].len(), 2);
    }

    #[test]
    fn test_out_of_window_records_are_excluded() {
        let buckets = PeriodBucketizer::window(ymd(2026, 6, 15), 2).unwrap();
        let records = vec![
            record_on(ymd(2026, 1, 10), dec!(100)),
            record_on(ymd(2026, 6, 10), dec!(40)),
        ];

        let totals = PeriodBucketizer::totals(&buckets, &records);

        assert_eq!(totals, vec![Decimal::ZERO, dec!(40)]);
    }

    #[test]
    fn test_totals_accumulate_within_a_bucket() {
        let buckets = PeriodBucketizer::window(ymd(2026, 6, 15), 1).unwrap();
        let records = vec![
            record_on(ymd(2026, 6, 1), dec!(0.10)),
            record_on(ymd(2026, 6, 2), dec!(0.20)),
            record_on(ymd(2026, 6, 30), dec!(0.30)),
        ];

        let totals = PeriodBucketizer::totals(&buckets, &records);

        assert_eq!(totals, vec![dec!(0.60)]);
    }

    #[test]
    fn test_leap_february_bucket() {
        let buckets = PeriodBucketizer::window(ymd(2028, 2, 10), 1).unwrap();
        let records = vec![record_on(ymd(2028, 2, 29), dec!(5))];

        let totals = PeriodBucketizer::totals(&buckets, &records);

        assert_eq!(totals, vec![dec!(5)]);
    }
}
