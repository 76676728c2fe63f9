use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pawview_logging::paw_warn;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

const FLAGS_FILENAME: &str = "flags.ron";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory missing or not writable: {0}")]
    StateDir(String),
    #[error("failed to serialize flags: {0}")]
    Serialize(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlagFile {
    flags: BTreeMap<String, bool>,
}

/// Named boolean preferences kept in a small RON file.
#[derive(Debug, Clone)]
pub struct FlagStore {
    dir: PathBuf,
}

impl FlagStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(FLAGS_FILENAME)
    }

    /// `None` when the flag was never written or the file is unreadable.
    pub fn read_flag(&self, name: &str) -> Option<bool> {
        self.load().flags.get(name).copied()
    }

    pub fn persist_flag(&self, name: &str, value: bool) -> Result<(), PersistError> {
        let mut file = self.load();
        file.flags.insert(name.to_string(), value);

        let content = ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::new())
            .map_err(|err| PersistError::Serialize(err.to_string()))?;
        write_atomically(&self.dir, FLAGS_FILENAME, &content)?;
        Ok(())
    }

    fn load(&self) -> FlagFile {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return FlagFile::default(),
            Err(err) => {
                paw_warn!("Failed to read flags from {:?}: {}", path, err);
                return FlagFile::default();
            }
        };
        match ron::from_str(&content) {
            Ok(file) => file,
            Err(err) => {
                paw_warn!("Failed to parse flags from {:?}: {}", path, err);
                FlagFile::default()
            }
        }
    }
}

/// Ensure the state directory exists; create if missing.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::StateDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
    }
    Ok(())
}

/// Write `{dir}/{filename}` through a temp file and a rename.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
    ensure_state_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target)
}
