use std::collections::HashMap;

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::model::profile::{Profile, Role};
use crate::repository::traits::ProfileRepository;
use crate::repository::ReferralRepository;
use crate::service::account::{
    generate_temp_password, login_email, normalize_username, TEMP_PASSWORD_LEN,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAccount {
    pub email: String,
    pub temp_password: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub profile: Profile,
    pub total_referrals: u64,
}

/// Admin-side provisioning and account listing, the CLI counterpart of
/// the original dashboard's admin API routes.
pub struct AdminUseCase<'a, P: ProfileRepository, R: ReferralRepository> {
    profile_repo: &'a P,
    referral_repo: &'a R,
}

impl<'a, P: ProfileRepository, R: ReferralRepository> AdminUseCase<'a, P, R> {
    pub fn new(profile_repo: &'a P, referral_repo: &'a R) -> Self {
        Self {
            profile_repo,
            referral_repo,
        }
    }

    /// Normalizes the requested username, synthesizes the login email
    /// and a temporary password, and stores the profile with
    /// `must_change_password` set. The temp password is returned once
    /// and never persisted here.
    pub fn create_account(&self, username: &str, role: Role) -> Result<CreatedAccount> {
        let normalized = normalize_username(username);
        if normalized.is_empty() {
            return Err(anyhow!("Invalid username: '{}'", username));
        }
        if self.profile_repo.find_by_username(&normalized)?.is_some() {
            return Err(anyhow!("Username '{}' already exists", normalized));
        }

        let email = login_email(&normalized);
        let temp_password = generate_temp_password(TEMP_PASSWORD_LEN);
        let profile = self.profile_repo.create(Profile::new(normalized, role))?;
        log::debug!("provisioned account {} as {}", profile.username, profile.role);

        Ok(CreatedAccount {
            email,
            temp_password,
            profile,
        })
    }

    /// All profiles ordered by username, each with its referral total
    /// summed across every stored month.
    pub fn list_accounts(&self) -> Result<Vec<AccountRow>> {
        let mut totals: HashMap<Uuid, u64> = HashMap::new();
        for (user_id, record) in self.referral_repo.list_all()? {
            *totals.entry(user_id).or_default() += u64::from(record.count());
        }

        let rows = self
            .profile_repo
            .list()?
            .into_iter()
            .map(|profile| {
                let total_referrals = totals.get(&profile.id).copied().unwrap_or(0);
                AccountRow {
                    profile,
                    total_referrals,
                }
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::month::MonthKey;
    use crate::model::referral::ReferralRecord;
    use std::cell::RefCell;

    struct MockProfileRepo {
        profiles: RefCell<Vec<Profile>>,
    }

    impl MockProfileRepo {
        fn empty() -> Self {
            Self {
                profiles: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProfileRepository for MockProfileRepo {
        fn create(&self, profile: Profile) -> Result<Profile> {
            self.profiles.borrow_mut().push(profile.clone());
            Ok(profile)
        }
        fn get(&self, id: &Uuid) -> Result<Profile> {
            self.profiles
                .borrow()
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .ok_or_else(|| anyhow!("not found"))
        }
        fn find_by_username(&self, username: &str) -> Result<Option<Profile>> {
            Ok(self
                .profiles
                .borrow()
                .iter()
                .find(|p| p.username == username)
                .cloned())
        }
        fn list(&self) -> Result<Vec<Profile>> {
            let mut profiles = self.profiles.borrow().clone();
            profiles.sort_by(|a, b| a.username.cmp(&b.username));
            Ok(profiles)
        }
        fn update(&self, _profile: &Profile) -> Result<()> {
            unimplemented!()
        }
    }

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

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn create_account_normalizes_and_flags_password_change() {
        let profiles = MockProfileRepo::empty();
        let referrals = MockReferralRepo { rows: vec![] };
        let admin = AdminUseCase::new(&profiles, &referrals);

        let created = admin.create_account("  John Doe ", Role::Affiliate).unwrap();
        assert_eq!(created.profile.username, "john-doe");
        assert_eq!(created.email, "john-doe@affiliate.getscora.app");
        assert_eq!(created.temp_password.len(), TEMP_PASSWORD_LEN);
        assert!(created.profile.must_change_password);
    }

    #[test]
    fn create_account_rejects_empty_and_duplicate_usernames() {
        let profiles = MockProfileRepo::empty();
        let referrals = MockReferralRepo { rows: vec![] };
        let admin = AdminUseCase::new(&profiles, &referrals);

        assert!(admin.create_account("!!!", Role::Affiliate).is_err());
        admin.create_account("alice", Role::Affiliate).unwrap();
        assert!(admin.create_account("Alice", Role::Admin).is_err());
    }

    #[test]
    fn list_accounts_sums_referrals_per_user() {
        let profiles = MockProfileRepo::empty();
        let referrals_stub = MockReferralRepo { rows: vec![] };
        let admin = AdminUseCase::new(&profiles, &referrals_stub);
        let alice = admin.create_account("alice", Role::Affiliate).unwrap().profile;
        let zoe = admin.create_account("zoe", Role::Admin).unwrap().profile;

        let referrals = MockReferralRepo {
            rows: vec![
                (alice.id, ReferralRecord::new(month("2024-05-01"), 4)),
                (alice.id, ReferralRecord::new(month("2024-06-01"), 6)),
                (zoe.id, ReferralRecord {
                    month: month("2024-06-01"),
                    referrals_count: None,
                }),
            ],
        };
        let admin = AdminUseCase::new(&profiles, &referrals);

        let rows = admin.list_accounts().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].profile.username, "alice");
        assert_eq!(rows[0].total_referrals, 10);
        assert_eq!(rows[1].profile.username, "zoe");
        assert_eq!(rows[1].total_referrals, 0);
    }
}
