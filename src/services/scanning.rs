use crate::config::WalkOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Finds game directories among the immediate children of a source tree.
pub struct ScanningService {
    pattern: String,
    walk_order: WalkOrder,
}

impl ScanningService {
    pub fn new(pattern: &str, walk_order: WalkOrder) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
            walk_order,
        }
    }

    /// Returns the subdirectories of `source_root` whose lowercased name
    /// contains the pattern. Files never match, and nothing below the first
    /// level is visited.
    pub fn find_all_game_paths(&self, source_root: &Path) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(source_root).min_depth(1).max_depth(1);
        if self.walk_order == WalkOrder::Sorted {
            walker = walker.sort_by_file_name();
        }

        let mut game_paths = Vec::new();
        for entry in walker {
            let entry = entry?;
            // Follows symlinks so a linked game directory still counts.
            if !entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.contains(&self.pattern) {
                debug!("Found game directory {}", entry.path().display());
                game_paths.push(entry.into_path());
            }
        }

        info!(
            "Found {} game directories in {}",
            game_paths.len(),
            source_root.display()
        );
        Ok(game_paths)
    }
}
