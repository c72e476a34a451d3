use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory whose immediate subdirectories are scanned for games
    pub source: PathBuf,

    /// Directory the normalized game copies and metadata.json are written to
    pub target: PathBuf,

    /// Case-insensitive text a directory name must contain to count as a game
    #[arg(long, default_value = "game", env = "GAMECOLLECTOR_PATTERN")]
    pub pattern: String,

    /// Text removed from every game directory name
    #[arg(long, default_value = "_game")]
    pub strip: String,

    /// Extension of the source file handed to the compiler
    #[arg(long, default_value = ".go")]
    pub extension: String,

    /// Compiler executable, looked up on PATH
    #[arg(long, default_value = "go", env = "GAMECOLLECTOR_COMPILER")]
    pub compiler: String,

    /// Arguments passed to the compiler before the source file name
    #[arg(
        long = "build-arg",
        default_values_t = vec!["build".to_string()],
        allow_hyphen_values = true
    )]
    pub build_args: Vec<String>,

    /// Copy games and write metadata without compiling anything
    #[arg(long)]
    pub skip_build: bool,

    /// Order in which directory entries are visited
    #[arg(long, value_enum, default_value_t = WalkOrder::Sorted)]
    pub walk_order: WalkOrder,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Entries sorted by file name, giving reproducible manifests
    #[default]
    Sorted,
    /// Whatever order the operating system returns
    Filesystem,
}
