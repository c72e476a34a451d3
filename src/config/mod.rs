use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

pub(crate) mod cli;

pub use cli::{Args, WalkOrder};

pub struct Config {
    pub args: Args,
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
}

impl Config {
    /// Resolves the source and target arguments against the working directory
    /// the process was started in. Absolute arguments are kept as given.
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let source_dir = cwd.join(&args.source);
        let target_dir = cwd.join(&args.target);

        info!(
            "Collecting games from {} into {}",
            source_dir.display(),
            target_dir.display()
        );

        Ok(Self {
            args,
            source_dir,
            target_dir,
        })
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.target_dir.join(crate::domain::storage::StorageKeys::MANIFEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let args = Args::try_parse_from(["gamecollector", "data", "out"]).unwrap();
        let config = Config::from_args(args).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(config.source_dir, cwd.join("data"));
        assert_eq!(config.target_dir, cwd.join("out"));
        assert_eq!(config.metadata_path(), cwd.join("out").join("metadata.json"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src");
        let args = Args::try_parse_from([
            std::ffi::OsStr::new("gamecollector"),
            source.as_os_str(),
            dir.path().as_os_str(),
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.source_dir, source);
        assert_eq!(config.target_dir, dir.path());
    }
}
