use crate::domain::DiscoveredGame;
use crate::error::{GameError, Result};
use std::path::PathBuf;

/// Derives one published name per path: the final path segment with every
/// occurrence of `to_strip` removed. The removal is not anchored to the end,
/// so `_game_game` with `_game` becomes an empty string.
pub fn derive_names(paths: &[PathBuf], to_strip: &str) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            let dir_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            dir_name.replace(to_strip, "")
        })
        .collect()
}

/// A name has to stay a child of the target root once joined onto it.
pub fn validate_name(game: &DiscoveredGame) -> Result<()> {
    if matches!(game.name.as_str(), "" | "." | "..") {
        return Err(GameError::InvalidGameName {
            name: game.name.clone(),
            source_dir: game.source.clone(),
        });
    }
    Ok(())
}

/// Pairs every path with its derived name and rejects the whole batch if any
/// name is unusable as a directory name.
pub fn name_games(paths: Vec<PathBuf>, to_strip: &str) -> Result<Vec<DiscoveredGame>> {
    let names = derive_names(&paths, to_strip);
    let games: Vec<DiscoveredGame> = paths
        .into_iter()
        .zip(names)
        .map(|(source, name)| DiscoveredGame::new(source, name))
        .collect();

    for game in &games {
        validate_name(game)?;
    }
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_from_base_name() {
        let paths = vec![
            PathBuf::from("/data/tic_tac_toe_game"),
            PathBuf::from("/data/hello_world_game"),
        ];
        assert_eq!(
            derive_names(&paths, "_game"),
            vec!["tic_tac_toe".to_string(), "hello_world".to_string()]
        );
    }

    #[test]
    fn removes_every_occurrence() {
        let paths = vec![
            PathBuf::from("/data/game_game"),
            PathBuf::from("/data/my_game_of_life_game"),
        ];
        assert_eq!(
            derive_names(&paths, "_game"),
            vec!["game".to_string(), "my_of_life".to_string()]
        );
        assert_eq!(derive_names(&[PathBuf::from("/data/_game_game")], "_game"), vec![""]);
    }

    #[test]
    fn uses_only_the_last_segment() {
        let paths = vec![PathBuf::from("/some_game/parent_game/pong_game")];
        assert_eq!(derive_names(&paths, "_game"), vec!["pong".to_string()]);
    }

    #[test]
    fn names_without_suffix_are_unchanged() {
        let paths = vec![PathBuf::from("/data/GameBoy")];
        assert_eq!(derive_names(&paths, "_game"), vec!["GameBoy".to_string()]);
    }

    #[test]
    fn duplicates_are_kept() -> Result<()> {
        let games = name_games(
            vec![PathBuf::from("/a/pong_game"), PathBuf::from("/a/pong_game_game")],
            "_game",
        )?;
        assert_eq!(games[0].name, "pong");
        assert_eq!(games[1].name, "pong");
        Ok(())
    }

    #[test]
    fn empty_and_dot_names_are_rejected() {
        for dir in ["/a/_game", "/a/._game", "/a/.._game"] {
            let err = name_games(vec![PathBuf::from(dir)], "_game").unwrap_err();
            assert!(matches!(err, GameError::InvalidGameName { .. }), "{dir}");
        }
    }
}
