use super::Manifest;
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn save_manifest(&self, manifest: &Manifest) -> Result<()>;
    fn load_manifest(&self) -> Result<Option<Manifest>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const MANIFEST: &'static str = "metadata.json";
}
