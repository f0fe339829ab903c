use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
}

/// The identity collaborator reduced to the three operations the
/// dashboard actually uses. Credential checks and tokens stay with the
/// hosted provider; locally this only answers "who is the caller".
pub trait SessionProvider {
    fn current(&self) -> Result<Option<Session>>;
    fn sign_in(&self, session: Session) -> Result<()>;
    fn sign_out(&self) -> Result<()>;
}

pub struct FileSessionStore {
    file_path: PathBuf,
}

impl FileSessionStore {
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
        path.push(SESSION_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &None::<Session>)?;
            writer.flush()?;
        }

        Ok(FileSessionStore { file_path: path })
    }

    fn write_session(&self, session: &Option<Session>) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)?;
        writer.flush()?;
        Ok(())
    }
}

impl SessionProvider for FileSessionStore {
    fn current(&self) -> Result<Option<Session>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let session = serde_json::from_reader(reader)?;
        Ok(session)
    }

    fn sign_in(&self, session: Session) -> Result<()> {
        log::debug!("signing in {}", session.username);
        self.write_session(&Some(session))
    }

    fn sign_out(&self) -> Result<()> {
        self.write_session(&None)
    }
}
