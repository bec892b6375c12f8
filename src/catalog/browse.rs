//! Developer, genre and platform listings over the catalog.
//!
//! Labels are addressed by slug: lowercase, whitespace runs collapsed to `-`.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::Game;

/// Games per listing page
pub const DEFAULT_PAGE_SIZE: usize = 32;

/// Lowercase `name` and replace each run of whitespace with a single `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Title-case a slug: "open-world" -> "Open World"
pub fn unslug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header data for a developer listing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeveloperSummary {
    pub name: String,
    pub slug: String,
    pub game_count: usize,
    /// Mean of the ratings that parse, `None` when there are none
    pub average_rating: Option<f64>,
}

impl DeveloperSummary {
    /// Average rating with one decimal, "0.0" when unrated
    pub fn formatted_average_rating(&self) -> String {
        format!("{:.1}", self.average_rating.unwrap_or(0.0))
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Slice `items` into page `page` (1-based; 0 is treated as 1)
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Distinct labels in first-seen order
fn distinct<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for label in labels {
        if !seen.contains(&label.as_str()) {
            seen.push(label.as_str());
        }
    }
    seen
}

impl Catalog {
    /// Every developer name, first-seen order
    pub fn developers(&self) -> Vec<&str> {
        distinct(self.games().iter().flat_map(|g| g.developers.iter()))
    }

    pub fn genres(&self) -> Vec<&str> {
        distinct(self.games().iter().flat_map(|g| g.genres.iter()))
    }

    pub fn platforms(&self) -> Vec<&str> {
        distinct(self.games().iter().flat_map(|g| g.platforms.iter()))
    }

    pub fn games_by_developer(&self, slug: &str) -> Vec<&Game> {
        self.games()
            .iter()
            .filter(|g| g.developers.iter().any(|d| slugify(d) == slug))
            .collect()
    }

    pub fn games_by_genre(&self, slug: &str) -> Vec<&Game> {
        self.games()
            .iter()
            .filter(|g| g.genres.iter().any(|genre| slugify(genre) == slug))
            .collect()
    }

    pub fn games_by_platform(&self, slug: &str) -> Vec<&Game> {
        self.games()
            .iter()
            .filter(|g| g.platforms.iter().any(|p| slugify(p) == slug))
            .collect()
    }

    pub fn developer_summary(&self, slug: &str) -> DeveloperSummary {
        let games = self.games_by_developer(slug);

        let name = match games.first() {
            Some(first) => first
                .developers
                .iter()
                .find(|d| slugify(d) == slug)
                .cloned()
                .unwrap_or_else(|| first.developers.join(", ")),
            None => unslug(slug),
        };

        let ratings: Vec<f64> = games.iter().filter_map(|g| g.rating_value()).collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        DeveloperSummary {
            name,
            slug: slug.to_string(),
            game_count: games.len(),
            average_rating,
        }
    }
}
