use rapidfuzz::distance::jaro_winkler;

use crate::core::Game;

pub const DEFAULT_MIN_SCORE: f64 = 70.0;

/// Catalog game matched against a free-text query
#[derive(Debug, Clone, Copy)]
pub struct TitleMatch<'a> {
    pub game: &'a Game,
    /// Jaro-Winkler similarity as a percentage (0-100)
    pub score: f64,
}

/// Fuzzy title lookup used to resolve free-text queries to catalog ids
#[derive(Debug, Clone)]
pub struct TitleSearch {
    pub min_score: f64,
}

impl TitleSearch {
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }

    /// Rank `games` by title similarity, highest first, dropping matches below `min_score`
    pub fn search<'a>(&self, query: &str, games: &'a [Game], limit: usize) -> Vec<TitleMatch<'a>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<TitleMatch<'a>> = games
            .iter()
            .map(|game| {
                let title_lower = game.title.to_lowercase();

                let score = jaro_winkler::normalized_similarity(
                    query_lower.chars(),
                    title_lower.chars(),
                );

                TitleMatch {
                    game,
                    score: score * 100.0,
                }
            })
            .filter(|m| m.score >= self.min_score)
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);

        ranked
    }
}

impl Default for TitleSearch {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> Vec<Game> {
        vec![
            Game::new("1", "Hollow Knight"),
            Game::new("2", "Hades"),
            Game::new("3", "Left 4 Dead"),
        ]
    }

    #[test]
    fn test_title_search_ranks_best_first() {
        let games = games();
        let matches = TitleSearch::default().search("hollow knigth", &games, 5);

        assert!(!matches.is_empty());
        assert_eq!(matches[0].game.id, "1");
    }

    #[test]
    fn test_exact_title_scores_100() {
        let games = games();
        let matches = TitleSearch::new(0.0).search("Hades", &games, 1);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].game.id, "2");
        assert_eq!(matches[0].score, 100.0);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let games = games();
        assert!(TitleSearch::new(0.0).search("   ", &games, 5).is_empty());
    }
}
