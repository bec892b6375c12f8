use std::collections::HashMap;

use crate::core::Game;

/// Flat bonus when target and candidate have identical genre sets
pub const EXACT_GENRE_SET_BONUS: u32 = 20;
/// Per-genre bonus applied when more than one genre matches
pub const MULTI_GENRE_BONUS: u32 = 3;
pub const SHARED_DEVELOPER_BONUS: u32 = 3;
pub const SHARED_PLATFORM_BONUS: u32 = 1;
pub const RATING_PROXIMITY_BONUS: u32 = 1;
/// Maximum rating delta that still earns the proximity bonus
pub const RATING_TOLERANCE: f64 = 0.5;

const RARITY_WEIGHT: f64 = 3.0;

/// Number of catalog games carrying each genre
#[derive(Debug, Clone, Default)]
pub struct GenreFrequency {
    counts: HashMap<String, usize>,
    catalog_size: usize,
}

impl GenreFrequency {
    /// Count genres across `games`; a genre listed twice in one game counts once
    pub fn from_games(games: &[Game]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for game in games {
            for genre in game.unique_genres() {
                *counts.entry(genre.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            catalog_size: games.len(),
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    pub fn count(&self, genre: &str) -> usize {
        self.counts.get(genre).copied().unwrap_or(0)
    }

    /// Number of distinct genres in the catalog
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `max(1, round(catalog_size / frequency * 3))`
    ///
    /// An unknown genre is treated as appearing once.
    pub fn rarity_score(&self, genre: &str) -> u32 {
        let frequency = self.count(genre).max(1) as f64;
        let raw = (self.catalog_size as f64 / frequency * RARITY_WEIGHT).round();
        (raw as u32).max(1)
    }
}

/// Which optional factors contribute to the score.
///
/// Genre rarity, exact-set and multi-genre contributions always apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringFactors {
    pub developer: bool,
    pub platform: bool,
    pub rating: bool,
}

impl ScoringFactors {
    pub const GENRE_ONLY: Self = Self {
        developer: false,
        platform: false,
        rating: false,
    };

    pub const ALL: Self = Self {
        developer: true,
        platform: true,
        rating: true,
    };
}

impl Default for ScoringFactors {
    fn default() -> Self {
        Self::ALL
    }
}

/// Score of one candidate against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimilarityScore {
    pub score: u32,
    pub matching_genres: usize,
}

/// Scores candidates against a fixed target
pub struct SimilarityScorer<'a> {
    target: &'a Game,
    target_genres: Vec<&'a str>,
    frequency: &'a GenreFrequency,
    factors: ScoringFactors,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(target: &'a Game, frequency: &'a GenreFrequency, factors: ScoringFactors) -> Self {
        Self {
            target,
            target_genres: target.unique_genres(),
            frequency,
            factors,
        }
    }

    pub fn target(&self) -> &Game {
        self.target
    }

    /// Distinct candidate genres that the target also carries, in candidate order
    pub fn matching_genres<'g>(&self, candidate: &'g Game) -> Vec<&'g str> {
        candidate
            .unique_genres()
            .into_iter()
            .filter(|genre| self.target_genres.iter().any(|t| t == genre))
            .collect()
    }

    pub fn score(&self, candidate: &Game) -> SimilarityScore {
        let matching = self.matching_genres(candidate);
        let k = matching.len();

        let mut score: u32 = matching
            .iter()
            .map(|genre| self.frequency.rarity_score(genre))
            .sum();

        // matching is a subset of both sets, so equal sizes means equal sets
        if k > 0 && k == self.target_genres.len() && k == candidate.unique_genres().len() {
            score += EXACT_GENRE_SET_BONUS;
        }

        if k > 1 {
            score += MULTI_GENRE_BONUS * k as u32;
        }

        if self.factors.developer && candidate.shares_developer(self.target) {
            score += SHARED_DEVELOPER_BONUS;
        }

        if self.factors.platform && candidate.shares_platform(self.target) {
            score += SHARED_PLATFORM_BONUS;
        }

        if self.factors.rating && candidate.rating_within(self.target, RATING_TOLERANCE) {
            score += RATING_PROXIMITY_BONUS;
        }

        SimilarityScore {
            score,
            matching_genres: k,
        }
    }
}
