use serde::{Deserialize, Serialize};

use crate::model::month::MonthKey;

/// One affiliate's active-referral count for one calendar month, as read
/// from the row store. The count column is nullable there, so it stays
/// optional here and reads as zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReferralRecord {
    pub month: MonthKey,
    pub referrals_count: Option<u32>,
}

impl ReferralRecord {
    pub fn new(month: MonthKey, count: u32) -> Self {
        Self {
            month,
            referrals_count: Some(count),
        }
    }

    pub fn count(&self) -> u32 {
        self.referrals_count.unwrap_or(0)
    }
}
