use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Manifest;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Keeps `metadata.json` at the root of the target tree.
#[derive(Clone)]
pub struct FileSystemStore {
    target_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.target_dir.join(key)
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        let path = self.get_path_for_key(key);
        let content = serde_json::to_string(data)?;
        fs::write(&path, content)?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.get_path_for_key(key);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        self.write_json_file(StorageKeys::MANIFEST, manifest)
    }

    fn load_manifest(&self) -> Result<Option<Manifest>> {
        self.read_json_file(StorageKeys::MANIFEST)
    }
}
