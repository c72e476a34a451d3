mod game;
mod manifest;
pub(crate) mod storage;

pub use game::DiscoveredGame;
pub use manifest::Manifest;
