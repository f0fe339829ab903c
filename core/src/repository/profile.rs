use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::model::profile::Profile;
use crate::repository::traits::ProfileRepository;

const PROFILES_FILE_NAME: &str = "profiles.json";

#[derive(Clone)]
pub struct FileProfileRepository {
    file_path: PathBuf,
}

impl FileProfileRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".affidash")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(PROFILES_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Profile>::new())?;
            writer.flush()?;
        }

        Ok(FileProfileRepository { file_path: path })
    }

    fn read_profiles(&self) -> Result<Vec<Profile>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let profiles = serde_json::from_reader(reader)?;
        Ok(profiles)
    }

    fn write_profiles(&self, profiles: &[Profile]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, profiles)?;
        writer.flush()?;
        Ok(())
    }
}

impl ProfileRepository for FileProfileRepository {
    fn create(&self, profile: Profile) -> Result<Profile> {
        let mut profiles = self.read_profiles()?;
        if profiles.iter().any(|p| p.username == profile.username) {
            return Err(anyhow!("Username '{}' already exists", profile.username));
        }
        log::debug!("creating profile {} ({})", profile.username, profile.id);
        profiles.push(profile.clone());
        self.write_profiles(&profiles)?;
        Ok(profile)
    }

    fn get(&self, id: &Uuid) -> Result<Profile> {
        let profiles = self.read_profiles()?;
        profiles
            .into_iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| anyhow!("Profile with ID {} not found", id))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let profiles = self.read_profiles()?;
        Ok(profiles.into_iter().find(|p| p.username == username))
    }

    fn list(&self) -> Result<Vec<Profile>> {
        let mut profiles = self.read_profiles()?;
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }

    fn update(&self, profile: &Profile) -> Result<()> {
        let mut profiles = self.read_profiles()?;
        if let Some(pos) = profiles.iter().position(|p| p.id == profile.id) {
            profiles[pos] = profile.clone();
            self.write_profiles(&profiles)?;
            Ok(())
        } else {
            Err(anyhow!("Profile with ID {} not found", profile.id))
        }
    }
}
