use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::month::MonthKey;
use crate::model::referral::ReferralRecord;

const REFERRALS_FILE_NAME: &str = "affiliates.json";

/// Snapshot reads and writes against the per-account-per-month referral
/// rows. In production this is the hosted row store; the trait keeps the
/// aggregation side testable against an in-memory double.
pub trait ReferralRepository {
    fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<ReferralRecord>>;
    fn list_all(&self) -> Result<Vec<(Uuid, ReferralRecord)>>;
    /// Replaces the row for (user, month) if present, inserts otherwise.
    /// This is where the one-row-per-account-per-month assumption is
    /// enforced.
    fn upsert(&self, user_id: &Uuid, record: ReferralRecord) -> Result<()>;
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct StoredRow {
    user_id: Uuid,
    month: MonthKey,
    referrals_count: Option<u32>,
}

pub struct FileReferralRepository {
    file_path: PathBuf,
}

impl FileReferralRepository {
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
        path.push(REFERRALS_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<StoredRow>::new())?;
            writer.flush()?;
        }

        Ok(FileReferralRepository { file_path: path })
    }

    fn read_rows(&self) -> Result<Vec<StoredRow>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let rows = serde_json::from_reader(reader)?;
        Ok(rows)
    }

    fn write_rows(&self, rows: &[StoredRow]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer.flush()?;
        Ok(())
    }
}

impl ReferralRepository for FileReferralRepository {
    fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<ReferralRecord>> {
        let rows = self.read_rows()?;
        Ok(rows
            .into_iter()
            .filter(|row| row.user_id == *user_id)
            .map(|row| ReferralRecord {
                month: row.month,
                referrals_count: row.referrals_count,
            })
            .collect())
    }

    fn list_all(&self) -> Result<Vec<(Uuid, ReferralRecord)>> {
        let rows = self.read_rows()?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.user_id,
                    ReferralRecord {
                        month: row.month,
                        referrals_count: row.referrals_count,
                    },
                )
            })
            .collect())
    }

    fn upsert(&self, user_id: &Uuid, record: ReferralRecord) -> Result<()> {
        let mut rows = self.read_rows()?;
        let new_row = StoredRow {
            user_id: *user_id,
            month: record.month,
            referrals_count: record.referrals_count,
        };
        if let Some(pos) = rows
            .iter()
            .position(|row| row.user_id == *user_id && row.month == record.month)
        {
            rows[pos] = new_row;
        } else {
            rows.push(new_row);
        }
        log::debug!("upserted referral row for {} month {}", user_id, record.month);
        self.write_rows(&rows)?;
        Ok(())
    }
}
