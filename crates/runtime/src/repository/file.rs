//! File-based ProgressionRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ProgressionRepository, ProgressionSnapshot, RepositoryError, Result};

/// On-disk envelope. The snapshot lives under a fixed storage key.
#[derive(Serialize, Deserialize)]
struct SaveFile {
    #[serde(rename = "bossBattleData")]
    data: ProgressionSnapshot,
}

#[derive(Serialize)]
struct SaveFileRef<'a> {
    #[serde(rename = "bossBattleData")]
    data: &'a ProgressionSnapshot,
}

/// File-based implementation of ProgressionRepository.
///
/// # File Format
///
/// The snapshot is stored as pretty-printed JSON in `progression.json`:
///
/// ```text
/// { "bossBattleData": { "gold": 120, "playerLevel": 3, ... } }
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-save leaves the previous snapshot intact.
pub struct FileProgressionRepository {
    path: PathBuf,
}

impl FileProgressionRepository {
    pub const FILE_NAME: &'static str = "progression.json";

    /// Create a new file-based repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressionRepository for FileProgressionRepository {
    fn load(&self) -> Result<Option<ProgressionSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let file: SaveFile = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::CorruptedData(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Loaded progression from {}", self.path.display());

        Ok(Some(file.data))
    }

    fn save(&self, snapshot: &ProgressionSnapshot) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(&SaveFileRef { data: snapshot })
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved progression to {}", self.path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", self.path.display());
        }
        Ok(())
    }
}
