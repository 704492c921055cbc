use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, SharedError};
use crate::models::team::Game;

/// Which game category the dashboard shows: every title, or exactly one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum GameFilter {
    #[default]
    All,
    Only(Game),
}

impl GameFilter {
    const ALL_LITERAL: &'static str = "all";

    /// The six sidebar choices, wildcard first
    pub fn choices() -> impl Iterator<Item = GameFilter> {
        std::iter::once(GameFilter::All).chain(Game::ALL.into_iter().map(GameFilter::Only))
    }

    pub fn matches(&self, game: Game) -> bool {
        match self {
            GameFilter::All => true,
            GameFilter::Only(wanted) => *wanted == game,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameFilter::All => Self::ALL_LITERAL,
            GameFilter::Only(game) => game.as_str(),
        }
    }
}

impl TryFrom<String> for GameFilter {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self> {
        if value == Self::ALL_LITERAL {
            Ok(GameFilter::All)
        } else {
            value.parse::<Game>().map(GameFilter::Only)
        }
    }
}

impl From<GameFilter> for String {
    fn from(filter: GameFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for GameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field the team list is ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "wins")]
    Wins,
    #[serde(rename = "losses")]
    Losses,
    #[default]
    #[serde(rename = "winRate")]
    WinRate,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Name, SortBy::Wins, SortBy::Losses, SortBy::WinRate];
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Name => write!(f, "Name"),
            SortBy::Wins => write!(f, "Wins"),
            SortBy::Losses => write!(f, "Losses"),
            SortBy::WinRate => write!(f, "Win Rate"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[default]
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "Ascending"),
            SortOrder::Desc => write!(f, "Descending"),
        }
    }
}

/// The user's current view of the dataset. Persisted whole on every change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub game: GameFilter,
    pub search_query: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl FilterSpec {
    pub fn with_game(&self, game: GameFilter) -> Self {
        Self { game, ..self.clone() }
    }

    pub fn with_search_query(&self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self.clone()
        }
    }

    pub fn with_sort_by(&self, sort_by: SortBy) -> Self {
        Self { sort_by, ..self.clone() }
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self { sort_order, ..self.clone() }
    }

    /// Overlays a persisted JSON object onto the defaults.
    ///
    /// Each known key is taken only if its value parses as that field's type;
    /// anything else keeps the default, so older or hand-edited records still
    /// load. A value that is not an object yields the defaults.
    pub fn merged_over_defaults(value: &serde_json::Value) -> Self {
        let mut spec = Self::default();
        let Some(object) = value.as_object() else {
            log::warn!("Stored filters are not a JSON object, using defaults");
            return spec;
        };

        overlay(object, "game", &mut spec.game);
        overlay(object, "searchQuery", &mut spec.search_query);
        overlay(object, "sortBy", &mut spec.sort_by);
        overlay(object, "sortOrder", &mut spec.sort_order);
        spec
    }
}

fn overlay<T: DeserializeOwned>(
    object: &serde_json::Map<String, serde_json::Value>,
    key: &str,
    slot: &mut T,
) {
    if let Some(raw) = object.get(key) {
        match T::deserialize(raw) {
            Ok(value) => *slot = value,
            Err(e) => log::warn!("Ignoring stored filter field '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_default_filter_spec() {
        let spec = FilterSpec::default();
        assert_eq!(spec.game, GameFilter::All);
        assert_eq!(spec.search_query, "");
        assert_eq!(spec.sort_by, SortBy::WinRate);
        assert_eq!(spec.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_filter_spec_wire_format() {
        let spec = FilterSpec {
            game: GameFilter::Only(Game::Dota2),
            search_query: "team".to_string(),
            sort_by: SortBy::WinRate,
            sort_order: SortOrder::Asc,
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "game": "Dota 2",
                "searchQuery": "team",
                "sortBy": "winRate",
                "sortOrder": "asc"
            })
        );
    }

    #[test_case("all", GameFilter::All ; "wildcard")]
    #[test_case("Valorant", GameFilter::Only(Game::Valorant) ; "valorant")]
    #[test_case("Overwatch 2", GameFilter::Only(Game::Overwatch2) ; "overwatch")]
    fn test_game_filter_parses(raw: &str, expected: GameFilter) {
        let parsed: GameFilter = serde_json::from_value(json!(raw)).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test_case("All" ; "capitalized wildcard")]
    #[test_case("Fortnite" ; "unknown title")]
    #[test_case("" ; "empty")]
    fn test_game_filter_rejects(raw: &str) {
        assert!(serde_json::from_value::<GameFilter>(json!(raw)).is_err());
    }

    #[test]
    fn test_game_filter_choices() {
        let choices: Vec<GameFilter> = GameFilter::choices().collect();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], GameFilter::All);
        assert!(choices[0].matches(Game::Dota2));
        assert!(!choices[1].matches(Game::Dota2));
    }

    #[test]
    fn test_with_helpers_replace_one_field() {
        let spec = FilterSpec::default()
            .with_game(GameFilter::Only(Game::Valorant))
            .with_search_query("nova")
            .with_sort_by(SortBy::Name)
            .with_sort_order(SortOrder::Asc);
        assert_eq!(spec.game, GameFilter::Only(Game::Valorant));
        assert_eq!(spec.search_query, "nova");
        assert_eq!(spec.sort_by, SortBy::Name);
        assert_eq!(spec.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_merge_partial_record_keeps_defaults() {
        let spec = FilterSpec::merged_over_defaults(&json!({ "sortBy": "name" }));
        assert_eq!(spec, FilterSpec::default().with_sort_by(SortBy::Name));
    }

    #[test]
    fn test_merge_ignores_invalid_and_unknown_fields() {
        let spec = FilterSpec::merged_over_defaults(&json!({
            "game": "Fortnite",
            "searchQuery": "fnatic",
            "sortOrder": "sideways",
            "pageSize": 50
        }));
        assert_eq!(spec, FilterSpec::default().with_search_query("fnatic"));
    }

    #[test_case(json!(null) ; "null")]
    #[test_case(json!([1, 2, 3]) ; "array")]
    #[test_case(json!("dark") ; "string")]
    fn test_merge_non_object_yields_defaults(value: serde_json::Value) {
        assert_eq!(FilterSpec::merged_over_defaults(&value), FilterSpec::default());
    }
}
