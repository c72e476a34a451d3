use crate::config::WalkOrder;
use crate::error::Result;
use crate::infrastructure::{BuildOutcome, Compiler};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

pub struct BuildingService {
    compiler: Compiler,
    extension: String,
    walk_order: WalkOrder,
}

impl BuildingService {
    pub fn new(compiler: Compiler, extension: &str, walk_order: WalkOrder) -> Self {
        Self {
            compiler,
            extension: extension.to_string(),
            walk_order,
        }
    }

    /// Name of the first file directly inside `game_dir` that ends with the
    /// configured extension. Subdirectories are not searched.
    pub fn find_source_file(&self, game_dir: &Path) -> Result<Option<String>> {
        let mut walker = WalkDir::new(game_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);
        if self.walk_order == WalkOrder::Sorted {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if file_name.ends_with(&self.extension) {
                return Ok(Some(file_name.into_owned()));
            }
        }

        Ok(None)
    }

    /// Compiles the game in `game_dir`. Returns `None` when there is nothing
    /// to compile. A failing compile is returned as an outcome, not an error.
    pub async fn build(&self, game_dir: &Path) -> Result<Option<BuildOutcome>> {
        let Some(file_name) = self.find_source_file(game_dir)? else {
            debug!("No {} file in {}, skipping build", self.extension, game_dir.display());
            return Ok(None);
        };

        let outcome = self.compiler.build(&file_name, game_dir).await?;
        Ok(Some(outcome))
    }
}
