use crate::domain::DiscoveredGame;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Copies game directories into the target tree under their published names.
pub struct MaterializingService {
    target_dir: PathBuf,
}

impl MaterializingService {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Creates the target root if needed. Anything already inside it stays.
    pub fn ensure_target_dir(&self) -> Result<()> {
        if !self.target_dir.exists() {
            fs::create_dir_all(&self.target_dir)?;
            info!("Created {}", self.target_dir.display());
        }
        Ok(())
    }

    /// Replaces `<target>/<name>` with a fresh copy of the game's source
    /// directory and returns the destination path.
    pub fn materialize(&self, game: &DiscoveredGame) -> Result<PathBuf> {
        let dest = game.destination(&self.target_dir);
        copy_and_overwrite(&game.source, &dest)?;
        info!("Copied {} to {}", game.source.display(), dest.display());
        Ok(dest)
    }
}

/// Deletes whatever is at `dest` and copies `src` there recursively. A copy
/// interrupted by an error is left as is.
pub fn copy_and_overwrite(src: &Path, dest: &Path) -> Result<()> {
    remove_existing(dest)?;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(src).unwrap_or(Path::new(""));
        let new_path = dest.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&new_path)?;
        } else {
            fs::copy(entry.path(), &new_path)?;
        }
    }

    Ok(())
}

fn remove_existing(path: &Path) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    debug!("Removing existing {}", path.display());
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
