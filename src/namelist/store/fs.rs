use super::StorageBackend;
use crate::error::{NamesError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: each key lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NamesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NamesError::Io)?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a temp file and rename so a failed write never truncates the old value
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(NamesError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.key_path(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NamesError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        assert_eq!(backend.load("names").unwrap(), None);
    }

    #[test]
    fn save_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(&root);

        backend.save("names", "[]").unwrap();

        assert!(root.join("names.json").exists());
        assert_eq!(backend.load("names").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path());

        backend.save("paginationSettings", "1").unwrap();
        backend.save("paginationSettings", "2").unwrap();

        assert_eq!(
            backend.load("paginationSettings").unwrap().as_deref(),
            Some("2")
        );
        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn save_fails_when_root_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let backend = FsBackend::new(&blocker);
        assert!(matches!(backend.save("names", "[]"), Err(NamesError::Io(_))));
    }
}
