mod clients;
mod storage;

pub use clients::compiler::{BuildOutcome, Compiler};
pub use storage::fs_store::FileSystemStore;
