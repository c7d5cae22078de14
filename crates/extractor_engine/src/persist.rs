use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use extractor_logging::{extractor_info, extractor_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const PREFERENCES_FILENAME: &str = ".extractor_prefs.ron";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("preference directory missing or not writable: {0}")]
    Dir(String),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] ron::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Small string key/value store kept in a RON file.
///
/// Reads are served from memory; every `set` rewrites the whole file
/// atomically (temp file then rename).
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Load the store from `dir`. A missing or unreadable file yields an
    /// empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(PREFERENCES_FILENAME);
        let values: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(values) => {
                    extractor_info!("Loaded preferences from {:?}", path);
                    values
                }
                Err(err) => {
                    extractor_warn!("Failed to parse preferences from {:?}: {}", path, err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                extractor_warn!("Failed to read preferences from {:?}: {}", path, err);
                BTreeMap::new()
            }
        };
        Self { dir, values }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILENAME)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Write `key` to disk. Memory is only updated once the file is written.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());
        let content = ron::ser::to_string_pretty(&next, ron::ser::PrettyConfig::new())?;
        write_atomic(&self.dir, PREFERENCES_FILENAME, &content)?;
        self.values = next;
        Ok(())
    }
}

/// Ensure directory exists; create if missing.
fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::Dir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::Dir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::Dir(e.to_string()))?;
    }
    Ok(())
}

fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
    ensure_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target)
}
