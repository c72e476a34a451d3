use std::path::{Path, PathBuf};

/// A game directory found in the source tree together with the name it is
/// published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredGame {
    pub source: PathBuf,
    pub name: String,
}

impl DiscoveredGame {
    pub fn new(source: PathBuf, name: String) -> Self {
        Self { source, name }
    }

    pub fn destination(&self, target_root: &Path) -> PathBuf {
        target_root.join(&self.name)
    }
}
