use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub game_names: Vec<String>,
    pub number_of_games: usize,
}

impl Manifest {
    pub fn new(game_names: Vec<String>) -> Self {
        Self {
            number_of_games: game_names.len(),
            game_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_follows_names() {
        let manifest = Manifest::new(vec!["hello".into(), "pong".into(), "hello".into()]);
        assert_eq!(manifest.number_of_games, manifest.game_names.len());
        assert_eq!(manifest.number_of_games, 3);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let manifest = Manifest::new(vec!["hello".into()]);
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value, json!({"gameNames": ["hello"], "numberOfGames": 1}));

        let text = serde_json::to_string(&manifest).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.find("gameNames").unwrap() < text.find("numberOfGames").unwrap());
    }

    #[test]
    fn empty_manifest() {
        let value = serde_json::to_value(Manifest::new(Vec::new())).unwrap();
        assert_eq!(value, json!({"gameNames": [], "numberOfGames": 0}));
    }
}
