use crate::core::{Game, MatchReason};
use crate::ranking::similarity::{GenreFrequency, ScoringFactors, SimilarityScorer};
use crate::ranking::{by_score_desc, candidates, RelatedPolicy, ScoredCandidate};

pub const DEFAULT_LIMIT: usize = 20;

/// Globally highest-scoring candidates under the full scoring formula.
///
/// Backs the "more like this" listing: developer, platform and rating
/// proximity all add to the genre score, zero scores are dropped and the
/// first `limit` survivors are returned. Ties keep catalog order.
#[derive(Debug, Clone)]
pub struct TopRankedPolicy {
    pub limit: usize,
    pub factors: ScoringFactors,
}

impl TopRankedPolicy {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            factors: ScoringFactors::ALL,
        }
    }
}

impl Default for TopRankedPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl RelatedPolicy for TopRankedPolicy {
    fn compose<'a>(
        &self,
        target: &Game,
        catalog: &'a [Game],
        frequency: &GenreFrequency,
    ) -> Vec<ScoredCandidate<'a>> {
        let scorer = SimilarityScorer::new(target, frequency, self.factors);

        let mut ranked: Vec<ScoredCandidate<'a>> = candidates(target, catalog)
            .map(|game| ScoredCandidate::new(game, scorer.score(game), MatchReason::Similarity))
            .filter(|candidate| candidate.score > 0)
            .collect();

        // stable: equal keys stay in catalog order
        ranked.sort_by(by_score_desc);
        ranked.truncate(self.limit);

        ranked
    }

    fn name(&self) -> &str {
        "top_ranked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(ranked: &[ScoredCandidate<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|c| c.game.id.as_str()).collect()
    }

    #[test]
    fn test_top_ranked_orders_by_score() {
        let games = vec![
            Game::new("t", "Target").with_genres(["RPG", "Action"]),
            Game::new("a", "A").with_genres(["RPG"]),
            Game::new("b", "B").with_genres(["RPG", "Action"]),
            Game::new("c", "C").with_genres(["Puzzle"]),
            Game::new("d", "D").with_genres(["Action", "Shooter"]),
        ];
        let freq = GenreFrequency::from_games(&games);
        let ranked = TopRankedPolicy::default().compose(&games[0], &games, &freq);

        assert_eq!(ranked[0].game.id, "b");
        // a and d both score 5 with one match; catalog order breaks the tie
        assert_eq!(ids(&ranked), vec!["b", "a", "d"]);
    }

    #[test]
    fn test_developer_bonus_is_small() {
        let mut games = vec![
            Game::new("t", "Target")
                .with_genres(["RPG", "Action"])
                .with_developers(["Studio"]),
            // one match (RPG) plus developer bonus
            Game::new("dev", "Dev").with_genres(["RPG"]).with_developers(["Studio"]),
            // two matches, no developer
            Game::new("two", "Two").with_genres(["RPG", "Action", "Indie"]),
        ];
        for i in 0..7 {
            games.push(Game::new(format!("f{i}"), "Filler").with_genres(["RPG", "Action"]));
        }
        let freq = GenreFrequency::from_games(&games);
        // RPG in 10 of 10 games, Action in 9 of 10: both round to 3
        assert_eq!(freq.rarity_score("RPG"), 3);
        assert_eq!(freq.rarity_score("Action"), 3);

        let ranked = TopRankedPolicy::default().compose(&games[0], &games, &freq);
        let dev = ranked.iter().find(|c| c.game.id == "dev").unwrap();
        let two = ranked.iter().find(|c| c.game.id == "two").unwrap();

        // dev: 3 + 3 (developer) = 6; two: 3 + 3 + 6 (multi) = 12
        assert_eq!(dev.score, 6);
        assert_eq!(two.score, 12);
        assert_eq!(ranked.last().unwrap().game.id, "dev");
    }

    #[test]
    fn test_tie_prefers_more_matching_genres() {
        let mut games = vec![
            Game::new("t", "Target")
                .with_genres(["A", "B", "C"])
                .with_developers(["Studio"]),
            // A is rare: round(7/2*3) = 11, plus developer = 14
            Game::new("one", "One").with_genres(["A"]).with_developers(["Studio"]),
            // B and C are common: round(7/6*3) = 4 each, plus multi 6 = 14
            Game::new("two", "Two").with_genres(["B", "C", "X"]),
        ];
        for i in 0..4 {
            games.push(Game::new(format!("f{i}"), "Filler").with_genres(["B", "C"]));
        }
        let freq = GenreFrequency::from_games(&games);

        let ranked = TopRankedPolicy::default().compose(&games[0], &games, &freq);
        assert!(ranked.iter().all(|c| c.score == 14));
        assert_eq!(ids(&ranked), vec!["two", "f0", "f1", "f2", "f3", "one"]);
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let games = vec![
            Game::new("t", "Target").with_genres(["RPG"]).with_rating("9.0"),
            Game::new("x", "Unrelated")
                .with_genres(["Racing"])
                .with_platforms(["Switch"])
                .with_rating("7.8"),
        ];
        let freq = GenreFrequency::from_games(&games);
        let ranked = TopRankedPolicy::default().compose(&games[0], &games, &freq);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_limit_caps_output() {
        let mut games = vec![Game::new("t", "Target").with_genres(["RPG"])];
        for i in 0..30 {
            games.push(Game::new(format!("g{i}"), "G").with_genres(["RPG"]));
        }
        let freq = GenreFrequency::from_games(&games);

        let ranked = TopRankedPolicy::default().compose(&games[0], &games, &freq);
        assert_eq!(ranked.len(), DEFAULT_LIMIT);

        let small = TopRankedPolicy::new(5).compose(&games[0], &games, &freq);
        assert_eq!(small.len(), 5);
        assert_eq!(ids(&small), vec!["g0", "g1", "g2", "g3", "g4"]);
    }

    #[test]
    fn test_empty_and_single_catalog() {
        let lone = Game::new("t", "Target").with_genres(["RPG"]);
        let freq = GenreFrequency::default();
        assert!(TopRankedPolicy::default().compose(&lone, &[], &freq).is_empty());

        let games = vec![lone.clone()];
        let freq = GenreFrequency::from_games(&games);
        assert!(TopRankedPolicy::default().compose(&lone, &games, &freq).is_empty());
    }
}
