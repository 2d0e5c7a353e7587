use crate::core::Storage;
use crate::utils::error::{MigrateError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
    atomic: bool,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self {
            base_path,
            atomic: false,
        }
    }

    /// Write through a temp file in the target's directory, then rename it over the target.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }

    fn write_atomic(&self, full_path: &Path, content: &str) -> Result<()> {
        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;

        // 保留原檔權限
        if let Ok(metadata) = fs::metadata(full_path) {
            fs::set_permissions(temp.path(), metadata.permissions())?;
        }

        temp.persist(full_path)
            .map_err(|e| MigrateError::PersistError {
                path: full_path.display().to_string(),
                message: e.error.to_string(),
            })?;
        Ok(())
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);
        let content = fs::read_to_string(full_path)?;
        Ok(content)
    }

    fn write_text(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.resolve(path);

        if self.atomic {
            return self.write_atomic(&full_path, content);
        }

        fs::write(full_path, content)?;
        Ok(())
    }
}
