use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::repository::traits::ProfileRepository;
use crate::repository::ReferralRepository;
use crate::service::aggregate::{aggregate, AggregateResult, COMMISSION_PER_REFERRAL};

pub const DEFAULT_REF_BASE_URL: &str = "https://app.scora.nl";

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub username: String,
    pub referral_link: String,
    pub stats: AggregateResult,
}

/// Builds one affiliate's dashboard view: fetch the monthly rows, run
/// the aggregation, and attach the shareable referral link. "Now" is
/// passed through untouched so callers control the current-month pivot.
pub struct OverviewUseCase<'a, R: ReferralRepository, P: ProfileRepository> {
    referral_repo: &'a R,
    profile_repo: &'a P,
    ref_base_url: String,
}

impl<'a, R: ReferralRepository, P: ProfileRepository> OverviewUseCase<'a, R, P> {
    pub fn new(referral_repo: &'a R, profile_repo: &'a P, ref_base_url: impl Into<String>) -> Self {
        Self {
            referral_repo,
            profile_repo,
            ref_base_url: ref_base_url.into(),
        }
    }

    pub fn overview(&self, user_id: &Uuid, now: NaiveDate) -> Result<Overview> {
        let profile = self.profile_repo.get(user_id)?;
        let records = self.referral_repo.list_for_user(user_id)?;
        log::debug!(
            "aggregating {} referral rows for {}",
            records.len(),
            profile.username
        );
        let stats = aggregate(&records, COMMISSION_PER_REFERRAL, now);
        // Usernames are normalized to [a-z0-9_-], so the ref code needs
        // no URL escaping.
        let referral_link = format!("{}?ref={}", self.ref_base_url, profile.username);
        Ok(Overview {
            username: profile.username,
            referral_link,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::month::MonthKey;
    use crate::model::profile::{Profile, Role};
    use crate::model::referral::ReferralRecord;

    struct MockReferralRepo {
        rows: Vec<(Uuid, ReferralRecord)>,
    }

    impl ReferralRepository for MockReferralRepo {
        fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<ReferralRecord>> {
            Ok(self
                .rows
                .iter()
                .filter(|(id, _)| id == user_id)
                .map(|(_, r)| r.clone())
                .collect())
        }
        fn list_all(&self) -> Result<Vec<(Uuid, ReferralRecord)>> {
            Ok(self.rows.clone())
        }
        fn upsert(&self, _user_id: &Uuid, _record: ReferralRecord) -> Result<()> {
            unimplemented!()
        }
    }

    struct MockProfileRepo {
        profile: Profile,
    }

    impl ProfileRepository for MockProfileRepo {
        fn create(&self, _profile: Profile) -> Result<Profile> {
            unimplemented!()
        }
        fn get(&self, id: &Uuid) -> Result<Profile> {
            if self.profile.id == *id {
                Ok(self.profile.clone())
            } else {
                Err(anyhow::anyhow!("Profile with ID {} not found", id))
            }
        }
        fn find_by_username(&self, _username: &str) -> Result<Option<Profile>> {
            unimplemented!()
        }
        fn list(&self) -> Result<Vec<Profile>> {
            Ok(vec![self.profile.clone()])
        }
        fn update(&self, _profile: &Profile) -> Result<()> {
            unimplemented!()
        }
    }

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn builds_overview_for_own_rows_only() {
        let profile = Profile::new("alice".to_string(), Role::Affiliate);
        let other = Uuid::new_v4();
        let referral_repo = MockReferralRepo {
            rows: vec![
                (profile.id, ReferralRecord::new(month("2024-05-01"), 4)),
                (profile.id, ReferralRecord::new(month("2024-06-01"), 10)),
                (other, ReferralRecord::new(month("2024-06-01"), 99)),
            ],
        };
        let profile_repo = MockProfileRepo {
            profile: profile.clone(),
        };
        let usecase = OverviewUseCase::new(&referral_repo, &profile_repo, DEFAULT_REF_BASE_URL);

        let now = "2024-06-15".parse().unwrap();
        let overview = usecase.overview(&profile.id, now).unwrap();

        assert_eq!(overview.username, "alice");
        assert_eq!(overview.referral_link, "https://app.scora.nl?ref=alice");
        assert_eq!(overview.stats.total_referrals, 14);
        assert_eq!(overview.stats.total_earnings, 70);
        assert_eq!(overview.stats.monthly_referrals, 10);
        assert_eq!(overview.stats.monthly_earnings, 50);
        assert_eq!(overview.stats.series.len(), 2);
    }

    #[test]
    fn unknown_user_is_an_error() {
        let profile = Profile::new("alice".to_string(), Role::Affiliate);
        let referral_repo = MockReferralRepo { rows: vec![] };
        let profile_repo = MockProfileRepo { profile };
        let usecase = OverviewUseCase::new(&referral_repo, &profile_repo, DEFAULT_REF_BASE_URL);

        let now = "2024-06-15".parse().unwrap();
        assert!(usecase.overview(&Uuid::new_v4(), now).is_err());
    }
}
