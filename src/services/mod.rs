pub(crate) mod building;
pub(crate) mod game_service;
pub(crate) mod materializing;
pub(crate) mod naming;
pub(crate) mod scanning;

pub use game_service::GameService;
