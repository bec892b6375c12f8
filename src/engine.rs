use crate::catalog::{paginate, Catalog, CatalogSource, DeveloperSummary, Page};
use crate::core::{Game, RelatedResponse};
use crate::error::{CatalogError, Result};
use crate::ranking::{
    GenreFrequency, QuotaFillPolicy, RelatedPolicy, TitleMatch, TitleSearch, TopRankedPolicy,
};
use std::sync::Arc;
use std::time::Instant;

/// Engine options/configuration
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Size of the inline related panel
    pub related_total: usize,
    /// Same-developer slots reserved in the related panel
    pub developer_cap: usize,
    /// Length of the "more like this" listing
    pub more_like_this_limit: usize,
    pub page_size: usize,
    pub min_search_score: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            related_total: 6,
            developer_cap: 3,
            more_like_this_limit: 20,
            page_size: 32,
            min_search_score: 70.0,
        }
    }
}

/// Related-games engine over one immutable catalog snapshot
pub struct RelatedGamesEngine {
    catalog: Arc<Catalog>,
    frequency: GenreFrequency,
    related: QuotaFillPolicy,
    more_like_this: TopRankedPolicy,
    title_search: TitleSearch,
    options: EngineOptions,
}

impl RelatedGamesEngine {
    /// Create engine with default options
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, EngineOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: EngineOptions) -> Self {
        // catalog is immutable for the engine's lifetime, so count genres once
        let frequency = GenreFrequency::from_games(catalog.games());

        tracing::info!(
            "Engine ready: {} games, {} genres",
            catalog.len(),
            frequency.len()
        );

        Self {
            catalog: Arc::new(catalog),
            frequency,
            related: QuotaFillPolicy::new(options.related_total, options.developer_cap),
            more_like_this: TopRankedPolicy::new(options.more_like_this_limit),
            title_search: TitleSearch::new(options.min_search_score),
            options,
        }
    }

    /// Load the catalog from a source, then build the engine
    pub async fn from_source(source: &dyn CatalogSource, options: EngineOptions) -> Result<Self> {
        let catalog = Catalog::from_source(source).await?;
        Ok(Self::with_options(catalog, options))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn game(&self, id: &str) -> Result<&Game> {
        self.catalog.require(id)
    }

    /// Inline "Related Games" panel: developer tier first, then genre fill
    pub fn related(&self, id: &str) -> Result<RelatedResponse> {
        self.compose(id, &self.related)
    }

    /// Full "more like this" listing: top-N by full similarity score
    pub fn more_like_this(&self, id: &str) -> Result<RelatedResponse> {
        self.compose(id, &self.more_like_this)
    }

    /// Run any policy against the catalog for the game with `id`
    pub fn compose(&self, id: &str, policy: &dyn RelatedPolicy) -> Result<RelatedResponse> {
        let start = Instant::now();

        let target = self.catalog.require(id).map_err(|e| {
            tracing::debug!("Related lookup for unknown id {}", id);
            e
        })?;

        let games = policy
            .compose(target, self.catalog.games(), &self.frequency)
            .iter()
            .map(|candidate| candidate.to_related())
            .collect::<Vec<_>>();

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            "{} for {} -> {} games ({:.3}ms)",
            policy.name(),
            target.display_name(),
            games.len(),
            latency_ms
        );

        let mut response = RelatedResponse::new(target.clone(), policy.name(), latency_ms);
        response.games = games;
        Ok(response)
    }

    /// Fuzzy title search across the whole catalog
    pub fn search(&self, query: &str, limit: usize) -> Vec<TitleMatch<'_>> {
        self.title_search.search(query, self.catalog.games(), limit)
    }

    /// Resolve free text to a game: exact id first, then best title match
    pub fn resolve(&self, query: &str) -> Result<&Game> {
        if let Some(game) = self.catalog.get(query) {
            return Ok(game);
        }
        self.search(query, 1)
            .first()
            .map(|m| m.game)
            .ok_or_else(|| CatalogError::GameNotFound(query.to_string()))
    }

    /// Developer header plus every game by that developer
    pub fn developer(&self, slug: &str) -> (DeveloperSummary, Vec<Game>) {
        (
            self.catalog.developer_summary(slug),
            self.owned(self.catalog.games_by_developer(slug)),
        )
    }

    pub fn genre(&self, slug: &str, page: usize) -> Page<Game> {
        let games = self.owned(self.catalog.games_by_genre(slug));
        paginate(&games, page, self.options.page_size)
    }

    pub fn platform(&self, slug: &str, page: usize) -> Page<Game> {
        let games = self.owned(self.catalog.games_by_platform(slug));
        paginate(&games, page, self.options.page_size)
    }

    fn owned(&self, games: Vec<&Game>) -> Vec<Game> {
        games.into_iter().cloned().collect()
    }
}
