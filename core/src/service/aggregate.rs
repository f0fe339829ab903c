use chrono::NaiveDate;

use crate::format::month_label;
use crate::model::month::MonthKey;
use crate::model::referral::ReferralRecord;

/// Fixed commission paid per active referral per month, in whole euros.
pub const COMMISSION_PER_REFERRAL: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub month: MonthKey,
    pub label: String,
    pub referrals: u32,
    pub earnings: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    /// Per-month figures, ascending by month.
    pub series: Vec<SeriesPoint>,
    pub total_referrals: u64,
    pub total_earnings: u64,
    /// First-of-month key for the injected "now".
    pub current_month: MonthKey,
    pub monthly_referrals: u64,
    pub monthly_earnings: u64,
}

/// Reduce one account's monthly referral rows to its dashboard figures.
///
/// Pure and deterministic: `now` is injected rather than read from the
/// clock, the input is never mutated, and there is no I/O. Duplicate
/// month keys are not collapsed; every row contributes to the totals on
/// its own, and the current-month snapshot takes the first matching row.
pub fn aggregate(records: &[ReferralRecord], rate: u64, now: NaiveDate) -> AggregateResult {
    let current_month = MonthKey::containing(now);

    let mut series: Vec<SeriesPoint> = records
        .iter()
        .map(|r| SeriesPoint {
            month: r.month,
            label: month_label(r.month),
            referrals: r.count(),
            earnings: u64::from(r.count()) * rate,
        })
        .collect();
    // Stable sort, so rows sharing a month keep their input order.
    series.sort_by_key(|p| p.month);

    let total_referrals: u64 = records.iter().map(|r| u64::from(r.count())).sum();
    let monthly_referrals = records
        .iter()
        .find(|r| r.month == current_month)
        .map(|r| u64::from(r.count()))
        .unwrap_or(0);

    AggregateResult {
        series,
        total_referrals,
        total_earnings: total_referrals * rate,
        current_month,
        monthly_referrals,
        monthly_earnings: monthly_referrals * rate,
    }
}
