use crate::model::profile::Profile;
use anyhow::Result;
use uuid::Uuid;

pub trait ProfileRepository {
    fn create(&self, profile: Profile) -> Result<Profile>;
    fn get(&self, id: &Uuid) -> Result<Profile>;
    fn find_by_username(&self, username: &str) -> Result<Option<Profile>>;
    /// All profiles, ordered by username.
    fn list(&self) -> Result<Vec<Profile>>;
    fn update(&self, profile: &Profile) -> Result<()>;
}
