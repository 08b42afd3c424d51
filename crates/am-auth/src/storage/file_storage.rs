use crate::{DurableStorage, StorageError, StorageResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S%.6f";
const EXTENSION: &str = "json";

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::dir_creation(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys map straight to file names, so only a conservative charset is allowed.
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key(key, "key cannot be empty"));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::invalid_key(
                key,
                "only ASCII letters, digits, '-' and '_' are allowed",
            ));
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

impl DurableStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    /// Temp file, fsync, rename over the final path.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;
        let temp_path = self
            .dir
            .join(format!("{key}.{EXTENSION}.tmp.{}", std::process::id()));

        if let Err(e) = write_synced(&temp_path, value) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored '{key}' at {}", final_path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.<timestamp>`, adding a
    /// counter when that name is taken.
    fn discard_corrupted(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let stem = format!(
            "{key}.{EXTENSION}.corrupted.{}",
            chrono::Utc::now().format(DATE_FORMAT)
        );
        let mut backup_path = self.dir.join(&stem);
        let mut attempt = 1u32;
        while backup_path.exists() {
            backup_path = self.dir.join(format!("{stem}-{attempt}"));
            attempt += 1;
        }

        fs::rename(&path, &backup_path)
            .map_err(|e| StorageError::backup_failed(path.clone(), e))?;

        warn!("Backed up corrupted '{key}' to {backup_path:?}");
        Ok(Some(backup_path.display().to_string()))
    }
}

fn write_synced(path: &Path, value: &str) -> StorageResult<()> {
    let mut file =
        fs::File::create(path).map_err(|e| StorageError::file_write(path.to_path_buf(), e))?;

    file.write_all(value.as_bytes())
        .map_err(|e| StorageError::file_write(path.to_path_buf(), e))?;

    file.sync_all()
        .map_err(|e| StorageError::file_write(path.to_path_buf(), e))
}
