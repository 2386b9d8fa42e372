use std::collections::BTreeMap;

use tracing::debug;

use crate::rules::error::{Error, Result};
use crate::rules::game::{GameDef, GameId};
use crate::rules::variants;

/// The set of games a host can offer, ordered by id.
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: BTreeMap<GameId, GameDef>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every game this crate knows how to play.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for game in variants::all() {
            registry.register(game)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, game: GameDef) -> Result<()> {
        let id = game.id();
        if self.games.contains_key(&id) {
            return Err(Error::DuplicateGame(id));
        }
        debug!(game = %id, name = game.name(), "registered");
        self.games.insert(id, game);
        Ok(())
    }

    pub fn get(&self, id: GameId) -> Option<&GameDef> {
        self.games.get(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GameDef> {
        self.games.values().find(|game| game.info.answers_to(name))
    }

    /// Resolve a numeric id (with or without a leading `#`) or a name.
    pub fn lookup(&self, query: &str) -> Result<&GameDef> {
        let query = query.trim();
        let by_id = query
            .trim_start_matches('#')
            .parse()
            .ok()
            .and_then(|id| self.get(GameId(id)));
        by_id
            .or_else(|| self.find_by_name(query))
            .ok_or_else(|| Error::UnknownGame(query.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameDef> {
        self.games.values()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_test() {
        let registry = GameRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 20);
        let ids: Vec<u32> = registry.iter().map(|game| game.id().0).collect();
        assert_eq!(ids.first(), Some(&141));
        assert_eq!(ids.last(), Some(&534));
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn duplicate_test() {
        let mut registry = GameRegistry::builtin().unwrap();
        let curds = registry.get(GameId(294)).unwrap().clone();
        assert!(matches!(
            registry.register(curds),
            Err(Error::DuplicateGame(GameId(294)))
        ));
        assert_eq!(registry.len(), 20);
    }

    #[test]
    fn lookup_test() {
        let registry = GameRegistry::builtin().unwrap();
        assert_eq!(registry.lookup("294").unwrap().name(), "Curds and Whey");
        assert_eq!(registry.lookup("#299").unwrap().name(), "Salic Law");
        assert_eq!(registry.lookup("der katzenschwanz").unwrap().id(), GameId(141));
        assert_eq!(registry.find_by_name("Die Schlange").unwrap().id(), GameId(142));
        assert!(registry.get(GameId(1)).is_none());
        assert!(matches!(
            registry.lookup("Klondike"),
            Err(Error::UnknownGame(name)) if name == "Klondike"
        ));
    }

    #[test]
    fn every_deal_places_every_card_test() {
        let registry = GameRegistry::builtin().unwrap();
        for game in registry.iter() {
            for seed in 0..8 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let table = game.deal(&mut rng).unwrap();
                assert_eq!(
                    table.card_count(),
                    52 * usize::from(game.info.decks),
                    "{}",
                    game.name()
                );
                assert!(!game.is_won(&table), "{}", game.name());
            }
        }
    }
}
