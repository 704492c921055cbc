use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;
use crate::error::{Result, SharedError};

/// The e-sports titles the dashboard knows about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Game {
    #[serde(rename = "League of Legends")]
    LeagueOfLegends,
    #[serde(rename = "Counter-Strike 2")]
    CounterStrike2,
    #[serde(rename = "Dota 2")]
    Dota2,
    #[serde(rename = "Valorant")]
    Valorant,
    #[serde(rename = "Overwatch 2")]
    Overwatch2,
}

impl Game {
    /// Every title, in sidebar order
    pub const ALL: [Game; 5] = [
        Game::LeagueOfLegends,
        Game::CounterStrike2,
        Game::Dota2,
        Game::Valorant,
        Game::Overwatch2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Game::LeagueOfLegends => "League of Legends",
            Game::CounterStrike2 => "Counter-Strike 2",
            Game::Dota2 => "Dota 2",
            Game::Valorant => "Valorant",
            Game::Overwatch2 => "Overwatch 2",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Game {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Game::ALL
            .iter()
            .copied()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| SharedError::UnknownGame(s.to_string()))
    }
}

/// One season of results for a team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearlyStats {
    pub year: i32,
    pub wins: u32,
    pub losses: u32,
    pub tournaments: u32,
}

/// An e-sports organization as it appears in the bundled dataset
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Stable identifier, unique within the dataset
    #[validate(length(min = 1, message = "Team id is required"))]
    pub id: String,

    /// Display name
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    pub game: Game,

    pub region: String,

    pub wins: u32,

    pub losses: u32,

    /// Expected to equal `wins + losses`, not enforced
    pub total_matches: u32,

    /// Percentage in [0, 100]
    #[validate(range(min = 0.0, max = 100.0, message = "Win rate must be between 0 and 100"))]
    pub win_rate: f64,

    /// Four-digit founding year
    #[validate(range(min = 1000, max = 9999, message = "Founding year must have four digits"))]
    pub founded: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default)]
    pub yearly_stats: Vec<YearlyStats>,
}

impl Team {
    /// Returns the stats entry for `year`, if the team has one
    pub fn stats_for_year(&self, year: i32) -> Option<&YearlyStats> {
        self.yearly_stats.iter().find(|s| s.year == year)
    }

    /// Wins recorded for `year`, 0 when the year is missing
    pub fn wins_in_year(&self, year: i32) -> u32 {
        self.stats_for_year(year).map(|s| s.wins).unwrap_or(0)
    }

    /// Up to two leading characters of the name, upper-cased (table avatar)
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn create_test_team() -> Team {
        Team {
            id: "team-1".to_string(),
            name: "Nebula Esports".to_string(),
            game: Game::Valorant,
            region: "EMEA".to_string(),
            wins: 30,
            losses: 10,
            total_matches: 40,
            win_rate: 75.0,
            founded: 2017,
            logo: None,
            yearly_stats: vec![
                YearlyStats { year: 2023, wins: 9, losses: 4, tournaments: 3 },
                YearlyStats { year: 2024, wins: 11, losses: 3, tournaments: 4 },
            ],
        }
    }

    #[rstest]
    #[case("League of Legends", Game::LeagueOfLegends)]
    #[case("Counter-Strike 2", Game::CounterStrike2)]
    #[case("Dota 2", Game::Dota2)]
    #[case("Valorant", Game::Valorant)]
    #[case("Overwatch 2", Game::Overwatch2)]
    fn test_game_from_str(#[case] title: &str, #[case] expected: Game) {
        assert_eq!(title.parse::<Game>().unwrap(), expected);
        assert_eq!(expected.to_string(), title);
    }

    #[test]
    fn test_game_from_str_is_case_sensitive() {
        assert_eq!(
            "valorant".parse::<Game>(),
            Err(SharedError::UnknownGame("valorant".to_string()))
        );
    }

    #[test]
    fn test_game_serde_uses_titles() {
        let json = serde_json::to_string(&Game::CounterStrike2).unwrap();
        assert_eq!(json, "\"Counter-Strike 2\"");
        assert!(serde_json::from_str::<Game>("\"Fortnite\"").is_err());
    }

    #[test]
    fn test_team_deserializes_camel_case() {
        let json = r#"{
            "id": "t1",
            "name": "Alpha",
            "game": "Dota 2",
            "region": "China",
            "wins": 10,
            "losses": 5,
            "totalMatches": 15,
            "winRate": 66.67,
            "founded": 2015,
            "yearlyStats": [{"year": 2024, "wins": 4, "losses": 2, "tournaments": 1}]
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.game, Game::Dota2);
        assert_eq!(team.total_matches, 15);
        assert_eq!(team.logo, None);
        assert_eq!(team.yearly_stats.len(), 1);
    }

    #[test]
    fn test_team_serialization_skips_missing_logo() {
        let json = serde_json::to_string(&create_test_team()).unwrap();
        assert!(json.contains("\"totalMatches\":40"));
        assert!(json.contains("\"yearlyStats\""));
        assert!(!json.contains("logo"));
    }

    #[test]
    fn test_team_validation_success() {
        assert!(create_test_team().validate().is_ok());
    }

    #[test]
    fn test_team_validation_win_rate_range() {
        let mut team = create_test_team();
        team.win_rate = 120.0;
        assert!(team.validate().is_err());
    }

    #[test]
    fn test_team_validation_empty_name() {
        let mut team = create_test_team();
        team.name = String::new();
        let err = team.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn test_stats_lookup() {
        let team = create_test_team();
        assert_eq!(team.stats_for_year(2024).map(|s| s.wins), Some(11));
        assert_eq!(team.wins_in_year(2025), 0);
    }

    #[rstest]
    #[case("Nebula Esports", "NE")]
    #[case("x", "X")]
    #[case("", "")]
    fn test_initials(#[case] name: &str, #[case] expected: &str) {
        let mut team = create_test_team();
        team.name = name.to_string();
        assert_eq!(team.initials(), expected);
    }
}
