use crate::error::SlotError;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A key-value location holding one whole serialized value per key.
pub trait Slot {
    /// Returns `None` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: BTreeMap<String, String>,
}

impl MemorySlot {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> Result<PathBuf, SlotError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(SlotError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SlotError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.path(key)?;
        let io = |source| SlotError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io)?;
        // written next to the target then renamed so readers never see a partial file
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        if let Err(err) = replace(&tmp, &path, value) {
            if let Err(cleanup) = fs::remove_file(&tmp)
                && cleanup.kind() != ErrorKind::NotFound
            {
                debug!("failed to remove {}: {cleanup}", tmp.display());
            }
            return Err(io(err));
        }
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

fn replace(tmp: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}
