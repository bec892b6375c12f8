use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize developer(s) from a single name or a list of names.
///
/// Anything else (null, numbers, objects, empty lists) means "no developer".
fn deserialize_developers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match Value::deserialize(deserializer)? {
        Value::String(name) => vec![name],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(names.into_iter().filter(|name| !name.is_empty()).collect())
}

/// Deserialize rating from string or number, keeping the text form
fn deserialize_rating<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Deserialize year from string or int; unparseable values become None
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i32),
        String(String),
        Other(Value),
    }

    match YearValue::deserialize(deserializer)? {
        YearValue::Int(i) => Ok(Some(i)),
        YearValue::String(s) => Ok(s.trim().parse::<i32>().ok()),
        YearValue::Other(_) => Ok(None),
    }
}

/// One block of system requirements
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemRequirements {
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub processor: String,
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub graphics: String,
    #[serde(default)]
    pub storage: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    #[serde(default)]
    pub minimum: SystemRequirements,
    #[serde(default)]
    pub recommended: SystemRequirements,
}

/// A game record as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    /// Unique catalog id
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Genre labels, in insertion order
    #[serde(rename = "genre", alias = "genres", default)]
    pub genres: Vec<String>,

    /// Developer name(s)
    #[serde(
        rename = "developer",
        alias = "developers",
        default,
        deserialize_with = "deserialize_developers"
    )]
    pub developers: Vec<String>,

    /// Platform labels
    #[serde(default)]
    pub platforms: Vec<String>,

    /// Rating as stored (e.g. "8.7")
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: String,

    #[serde(default, deserialize_with = "deserialize_year")]
    pub release_year: Option<i32>,

    /// Download size (e.g. "45 GB")
    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub banner: String,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default)]
    pub long_description: String,

    #[serde(default)]
    pub requirements: Requirements,
}

impl Game {
    /// Create a new Game with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres: Vec::new(),
            developers: Vec::new(),
            platforms: Vec::new(),
            rating: String::new(),
            release_year: None,
            size: String::new(),
            banner: String::new(),
            image: String::new(),
            background: None,
            long_description: String::new(),
            requirements: Requirements::default(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_developers<I, S>(mut self, developers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.developers = developers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Parsed rating, `None` when the stored text is not a finite number
    pub fn rating_value(&self) -> Option<f64> {
        self.rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Genres with duplicates removed, first occurrence wins
    pub fn unique_genres(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.genres.len());
        for genre in &self.genres {
            if !seen.contains(&genre.as_str()) {
                seen.push(genre.as_str());
            }
        }
        seen
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// True when any developer name appears in both records (exact match)
    pub fn shares_developer(&self, other: &Game) -> bool {
        self.developers
            .iter()
            .any(|dev| other.developers.contains(dev))
    }

    pub fn shares_platform(&self, other: &Game) -> bool {
        self.platforms.iter().any(|p| other.platforms.contains(p))
    }

    /// True when both ratings parse and lie within `tolerance` of each other
    pub fn rating_within(&self, other: &Game, tolerance: f64) -> bool {
        match (self.rating_value(), other.rating_value()) {
            (Some(a), Some(b)) => (a - b).abs() <= tolerance,
            _ => false,
        }
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if let Some(year) = self.release_year {
            format!("{} ({})", self.title, year)
        } else {
            self.title.clone()
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Game::new("hades", "Hades")
            .with_genres(["Roguelike", "Action"])
            .with_developers(["Supergiant Games"]);
        assert_eq!(game.id, "hades");
        assert_eq!(game.title, "Hades");
        assert_eq!(game.genres.len(), 2);
    }

    #[test]
    fn test_developer_as_string_or_list() {
        let single = Game::from_json(r#"{"id":"1","developer":"Valve"}"#).unwrap();
        assert_eq!(single.developers, vec!["Valve"]);

        let many =
            Game::from_json(r#"{"id":"2","developer":["Valve","Hidden Path"]}"#).unwrap();
        assert_eq!(many.developers, vec!["Valve", "Hidden Path"]);
    }

    #[test]
    fn test_malformed_developer_is_empty() {
        for raw in [
            r#"{"id":"1","developer":null}"#,
            r#"{"id":"1","developer":42}"#,
            r#"{"id":"1","developer":[]}"#,
            r#"{"id":"1","developer":{"name":"x"}}"#,
            r#"{"id":"1","developer":""}"#,
            r#"{"id":"1"}"#,
        ] {
            let game = Game::from_json(raw).unwrap();
            assert!(game.developers.is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_rating_text_or_number() {
        let text = Game::from_json(r#"{"id":"1","rating":"8.5"}"#).unwrap();
        assert_eq!(text.rating, "8.5");
        assert_eq!(text.rating_value(), Some(8.5));

        let number = Game::from_json(r#"{"id":"1","rating":9.1}"#).unwrap();
        assert_eq!(number.rating_value(), Some(9.1));

        let junk = Game::from_json(r#"{"id":"1","rating":"N/A"}"#).unwrap();
        assert_eq!(junk.rating_value(), None);
    }

    #[test]
    fn test_rating_within() {
        let a = Game::new("a", "A").with_rating("8.0");
        let b = Game::new("b", "B").with_rating("8.5");
        let c = Game::new("c", "C").with_rating("9.2");
        let d = Game::new("d", "D").with_rating("unrated");

        assert!(a.rating_within(&b, 0.5));
        assert!(!a.rating_within(&c, 0.5));
        assert!(!a.rating_within(&d, 0.5));
    }

    #[test]
    fn test_release_year_forms() {
        let int = Game::from_json(r#"{"id":"1","release_year":2020}"#).unwrap();
        assert_eq!(int.release_year, Some(2020));

        let text = Game::from_json(r#"{"id":"1","release_year":"2018"}"#).unwrap();
        assert_eq!(text.release_year, Some(2018));

        let tba = Game::from_json(r#"{"id":"1","release_year":"TBA"}"#).unwrap();
        assert_eq!(tba.release_year, None);
    }

    #[test]
    fn test_unique_genres() {
        let game = Game::new("1", "G").with_genres(["RPG", "Action", "RPG"]);
        assert_eq!(game.unique_genres(), vec!["RPG", "Action"]);
    }

    #[test]
    fn test_display_name() {
        let mut game = Game::new("1", "Celeste");
        assert_eq!(game.display_name(), "Celeste");
        game.release_year = Some(2018);
        assert_eq!(game.display_name(), "Celeste (2018)");
    }
}
