use crate::config::{Args, Config};
use crate::error::Result;
use crate::infrastructure::{Compiler, FileSystemStore};
use crate::services::{
    building::BuildingService, materializing::MaterializingService, scanning::ScanningService,
    GameService,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    let config = Config::from_args(args)?;

    let args = &config.args;
    let scanning = ScanningService::new(&args.pattern, args.walk_order);
    let materializing = MaterializingService::new(&config.target_dir);
    let building = BuildingService::new(
        Compiler::new(args.compiler.clone(), args.build_args.clone()),
        &args.extension,
        args.walk_order,
    );
    let store = Arc::new(FileSystemStore::new(&config.target_dir));

    let service = GameService::new(config, store, scanning, materializing, building);
    let manifest = service.process().await?;

    info!("Collected {} games", manifest.number_of_games);
    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<Level>();
    tracing_subscriber::fmt()
        .with_max_level(*level.as_ref().unwrap_or(&Level::INFO))
        .init();

    if level.is_err() {
        warn!("Unknown log level {:?}, using info", log_level);
    }
}
