use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogSource};
use crate::core::Game;
use crate::error::{CatalogError, Result};

/// Catalog stored as a JSON document on disk
///
/// Either a bare array of games or `{ "games": [...] }`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Game>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Source {
                source_name: self.name().to_string(),
                message: format!("{}: {}", self.path.display(), e),
            })?;

        let catalog = Catalog::from_json(&raw)?;
        tracing::info!("Loaded {} games from {}", catalog.len(), self.path.display());

        Ok(catalog.games().to_vec())
    }

    fn name(&self) -> &str {
        "json_file"
    }
}

/// Games held in memory
pub struct StaticSource {
    games: Vec<Game>,
}

impl StaticSource {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn load(&self) -> Result<Vec<Game>> {
        Ok(self.games.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![Game::new("1", "One")]);
        let catalog = Catalog::from_source(&source).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let path = std::env::temp_dir().join(format!(
            "related-games-source-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, r#"[{"id":"1","title":"One","genre":["RPG"]}]"#)
            .await
            .unwrap();

        let catalog = Catalog::from_source(&JsonFileSource::new(&path)).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(catalog.get("1").unwrap().genres, vec!["RPG"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_source_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Source { .. }));
    }
}
