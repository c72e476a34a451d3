use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{DiscoveredGame, Manifest};
use crate::error::{GameError, Result};
use crate::services::{
    building::BuildingService, materializing::MaterializingService, naming,
    scanning::ScanningService,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{debug, info};

pub struct GameService {
    config: Config,
    store: Arc<dyn Storage>,
    scanning: ScanningService,
    materializing: MaterializingService,
    building: BuildingService,
}

impl GameService {
    pub fn new(
        config: Config,
        store: Arc<dyn Storage + 'static>,
        scanning: ScanningService,
        materializing: MaterializingService,
        building: BuildingService,
    ) -> Self {
        Self {
            config,
            store,
            scanning,
            materializing,
            building,
        }
    }

    pub async fn process(&self) -> Result<Manifest> {
        info!("Starting game collection");

        let games = self.discover_games()?;
        info!("Discovery completed: {} games", games.len());

        self.materializing.ensure_target_dir()?;
        self.collect_games(&games).await?;

        let manifest = Manifest::new(games.into_iter().map(|game| game.name).collect());
        self.report_previous_manifest();
        self.store.save_manifest(&manifest)?;
        info!(
            "Game collection completed: {} games listed in {}",
            manifest.number_of_games,
            self.config.metadata_path().display()
        );

        Ok(manifest)
    }

    /// An unreadable old manifest is simply overwritten.
    fn report_previous_manifest(&self) {
        match self.store.load_manifest() {
            Ok(Some(previous)) => info!(
                "Replacing previous manifest listing {} games",
                previous.number_of_games
            ),
            Ok(None) => {}
            Err(e) => debug!("Ignoring unreadable previous manifest: {}", e),
        }
    }

    fn discover_games(&self) -> Result<Vec<DiscoveredGame>> {
        let paths = self
            .scanning
            .find_all_game_paths(&self.config.source_dir)?;
        naming::name_games(paths, &self.config.args.strip)
    }

    /// Copies and then compiles each game in discovery order. Compile
    /// failures are logged by the compiler client and do not stop the run.
    async fn collect_games(&self, games: &[DiscoveredGame]) -> Result<()> {
        let pb = ProgressBar::new(games.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| GameError::Other(e.to_string()))?,
        );

        for game in games {
            pb.set_message(format!("Collecting {}", game.name));
            let dest = self.materializing.materialize(game)?;

            if !self.config.args.skip_build {
                self.building.build(&dest).await?;
            }
            pb.inc(1);
        }

        pb.finish_with_message("Done collecting games!");
        Ok(())
    }
}
