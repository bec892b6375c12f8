pub mod browse;
pub mod source;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::Game;
use crate::error::{CatalogError, Result};

pub use browse::{paginate, slugify, unslug, DeveloperSummary, Page, DEFAULT_PAGE_SIZE};
pub use source::{JsonFileSource, StaticSource};

/// Trait for catalog data loaders (JSON file, in-memory, etc.)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every game record, in catalog order
    async fn load(&self) -> Result<Vec<Game>>;

    /// Get source name
    fn name(&self) -> &str;
}

/// Immutable, order-stable game collection with an id index
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
    index: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

/// Accepted top-level shapes of a catalog document
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Game>),
    Wrapped { games: Vec<Game> },
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(games: Vec<Game>) -> Result<Self> {
        let mut index = HashMap::with_capacity(games.len());
        for (pos, game) in games.iter().enumerate() {
            if index.insert(game.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateGameId(game.id.clone()));
            }
        }

        Ok(Self {
            games,
            index,
            loaded_at: Utc::now(),
        })
    }

    pub fn empty() -> Self {
        Self {
            games: Vec::new(),
            index: HashMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Parse a JSON array of games, or an object with a `games` array
    pub fn from_json(json: &str) -> Result<Self> {
        let games = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::List(games) => games,
            CatalogDocument::Wrapped { games } => games,
        };
        Self::new(games)
    }

    pub async fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let games = source.load().await?;
        tracing::debug!("Source {} returned {} games", source.name(), games.len());
        Self::new(games)
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.index.get(id).map(|&pos| &self.games[pos])
    }

    /// Like `get`, but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Game> {
        self.get(id)
            .ok_or_else(|| CatalogError::GameNotFound(id.to_string()))
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
