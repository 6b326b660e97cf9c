use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::engine::profile::LearnerProfile;
use crate::store::StoreError;
use crate::store::schema::{ProfileData, SCHEMA_VERSION};

const STATS_FILE: &str = "stats.json";

/// Loads and saves a learner profile as a single JSON document.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// crash mid-save leaves the previous profile intact. Concurrent processes
/// sharing one file are not coordinated: the last writer wins.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homerow")
            .join(STATS_FILE);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// A missing file yields the starting profile; anything unreadable is an error.
    pub fn load_profile(&self) -> Result<LearnerProfile, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no stats file, starting fresh");
            return Ok(LearnerProfile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data: ProfileData =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        if data.needs_reset() {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                found: data.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        let profile = data.into_profile();
        tracing::debug!(
            path = %self.path.display(),
            unlocked = profile.unlocked_count(),
            total_keystrokes = profile.total_keystrokes(),
            "loaded profile"
        );
        Ok(profile)
    }

    pub fn save_profile(&self, profile: &LearnerProfile) -> Result<(), StoreError> {
        let mut data = ProfileData::from_profile(profile);
        data.last_session_at = Some(Utc::now());
        self.save(&data)
    }

    /// Rename the current file to `<name>.bak` so a fresh save cannot
    /// overwrite it. Returns the backup path.
    pub fn move_aside(&self) -> Result<PathBuf, StoreError> {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        let backup = PathBuf::from(name);
        fs::rename(&self.path, &backup).map_err(|e| self.io_error(e))?;
        tracing::warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "moved unreadable stats file aside"
        );
        Ok(backup)
    }

    fn save(&self, data: &ProfileData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            Ok(())
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(e));
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "saved profile");
        Ok(())
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new()
    }
}
