use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::models::team::Team;

/// Seasons plotted on the wins evolution chart
pub const CHART_YEARS: [i32; 3] = [2023, 2024, 2025];
/// Leading teams plotted on the wins evolution chart
pub const TOP_TEAMS_EVOLUTION: usize = 5;
/// Leading teams shown on the ranking chart
pub const TOP_TEAMS_RANKING: usize = 8;
/// Longest ranking label before it is shortened with an ellipsis
pub const RANKING_LABEL_MAX_CHARS: usize = 15;
/// Series palette, assigned by index
pub const CHART_COLORS: [&str; 6] = ["#0ea5e9", "#d946ef", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];
pub const WIN_COLOR: &str = "#10b981";
pub const LOSS_COLOR: &str = "#ef4444";

pub fn palette_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChartType {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<DataPoint>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChartDataContent {
    SingleSeries(Vec<DataPoint>),
    MultiSeries(Vec<ChartSeries>),
}

impl ChartDataContent {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartDataContent::SingleSeries(points) => points.is_empty(),
            ChartDataContent::MultiSeries(series) => series.is_empty(),
        }
    }
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub title: String,
    pub data: ChartDataContent,
    pub metadata: HashMap<String, String>,
}

impl ChartData {
    fn new(chart_type: ChartType, title: &str, data: ChartDataContent) -> Self {
        Self {
            chart_type,
            title: title.to_string(),
            data,
            metadata: HashMap::new(),
        }
    }

    fn with_meta(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }
}

/// Wins per season for the first few teams of the (already sorted) list
pub fn wins_evolution(teams: &[Team]) -> ChartData {
    let series = teams
        .iter()
        .take(TOP_TEAMS_EVOLUTION)
        .enumerate()
        .map(|(i, team)| ChartSeries {
            name: team.name.clone(),
            data: CHART_YEARS
                .iter()
                .map(|&year| DataPoint {
                    label: year.to_string(),
                    value: f64::from(team.wins_in_year(year)),
                    color: None,
                })
                .collect(),
            color: Some(palette_color(i).to_string()),
        })
        .collect();

    ChartData::new(
        ChartType::Line,
        "Wins Evolution (Top 5)",
        ChartDataContent::MultiSeries(series),
    )
    .with_meta("x_axis", "Year")
    .with_meta("y_axis", "Wins")
}

/// Total wins for the first few teams of the (already sorted) list
pub fn team_ranking(teams: &[Team]) -> ChartData {
    let points = teams
        .iter()
        .take(TOP_TEAMS_RANKING)
        .enumerate()
        .map(|(i, team)| DataPoint {
            label: ranking_label(&team.name),
            value: f64::from(team.wins),
            color: Some(palette_color(i).to_string()),
        })
        .collect();

    ChartData::new(
        ChartType::Bar,
        "Team Ranking (Wins)",
        ChartDataContent::SingleSeries(points),
    )
    .with_meta("x_axis", "Team")
    .with_meta("y_axis", "Wins")
}

/// Overall wins against losses. Slice values are raw counts; use
/// [`percentages`] for each slice's share of the total.
pub fn win_loss_ratio(teams: &[Team]) -> ChartData {
    let total_wins: u64 = teams.iter().map(|t| u64::from(t.wins)).sum();
    let total_losses: u64 = teams.iter().map(|t| u64::from(t.losses)).sum();

    let points = vec![
        DataPoint {
            label: "Wins".to_string(),
            value: total_wins as f64,
            color: Some(WIN_COLOR.to_string()),
        },
        DataPoint {
            label: "Losses".to_string(),
            value: total_losses as f64,
            color: Some(LOSS_COLOR.to_string()),
        },
    ];

    ChartData::new(
        ChartType::Pie,
        "Global Win/Loss Ratio",
        ChartDataContent::SingleSeries(points),
    )
}

/// Share of each point in the series total, 0 for every point when the total is 0
pub fn percentages(points: &[DataPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .iter()
        .map(|p| if total > 0.0 { p.value / total * 100.0 } else { 0.0 })
        .collect()
}

fn ranking_label(name: &str) -> String {
    if name.chars().count() > RANKING_LABEL_MAX_CHARS {
        let short: String = name.chars().take(RANKING_LABEL_MAX_CHARS).collect();
        format!("{}...", short)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::{Game, YearlyStats};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn team(name: &str, wins: u32, losses: u32, yearly: &[(i32, u32)]) -> Team {
        Team {
            id: name.to_lowercase(),
            name: name.to_string(),
            game: Game::LeagueOfLegends,
            region: "Korea".to_string(),
            wins,
            losses,
            total_matches: wins + losses,
            win_rate: 0.0,
            founded: 2012,
            logo: None,
            yearly_stats: yearly
                .iter()
                .map(|&(year, wins)| YearlyStats { year, wins, losses: 0, tournaments: 1 })
                .collect(),
        }
    }

    #[test]
    fn test_wins_evolution_takes_top_five_with_missing_years_as_zero() {
        let teams: Vec<Team> = (0..7)
            .map(|i| team(&format!("Team {}", i), 10, 2, &[(2023, i), (2025, i * 2)]))
            .collect();

        let chart = wins_evolution(&teams);
        assert_eq!(chart.chart_type, ChartType::Line);
        let ChartDataContent::MultiSeries(series) = chart.data else {
            panic!("expected multi series");
        };
        assert_eq!(series.len(), 5);
        assert_eq!(series[3].name, "Team 3");
        let values: Vec<f64> = series[3].data.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![3.0, 0.0, 6.0]);
        let labels: Vec<&str> = series[0].data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2023", "2024", "2025"]);
        assert_eq!(series[0].color.as_deref(), Some("#0ea5e9"));
    }

    #[test]
    fn test_wins_evolution_with_few_teams() {
        let chart = wins_evolution(&[team("Solo", 1, 1, &[])]);
        assert!(matches!(chart.data, ChartDataContent::MultiSeries(ref s) if s.len() == 1));
        assert!(wins_evolution(&[]).data.is_empty());
    }

    #[test]
    fn test_team_ranking_caps_at_eight() {
        let teams: Vec<Team> = (0..10).map(|i| team(&format!("T{}", i), i, 0, &[])).collect();
        let ChartDataContent::SingleSeries(points) = team_ranking(&teams).data else {
            panic!("expected single series");
        };
        assert_eq!(points.len(), 8);
        assert_eq!(points[7].value, 7.0);
        // palette wraps after six colours
        assert_eq!(points[6].color.as_deref(), Some("#0ea5e9"));
    }

    #[rstest]
    #[case("Short Name", "Short Name")]
    #[case("Exactly15Chars!", "Exactly15Chars!")]
    #[case("Team Liquid Academy", "Team Liquid Aca...")]
    fn test_ranking_label(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(ranking_label(name), expected);
    }

    #[test]
    fn test_win_loss_ratio_percentages_sum_to_hundred() {
        let teams = vec![team("A", 30, 10, &[]), team("B", 10, 30, &[])];
        let ChartDataContent::SingleSeries(points) = win_loss_ratio(&teams).data else {
            panic!("expected single series");
        };
        assert_eq!(points[0].value, 40.0);
        assert_eq!(points[1].value, 40.0);
        let shares = percentages(&points);
        assert_eq!(shares, vec![50.0, 50.0]);
    }

    #[test]
    fn test_win_loss_ratio_empty_is_zero_percent() {
        let ChartDataContent::SingleSeries(points) = win_loss_ratio(&[]).data else {
            panic!("expected single series");
        };
        assert_eq!(percentages(&points), vec![0.0, 0.0]);
    }
}
