use serde::{Deserialize, Serialize};

/// Players assumed per roster when estimating head count
pub const SQUAD_SIZE: usize = 5;

/// The four headline numbers shown above the charts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_teams: usize,
    /// `total_teams * SQUAD_SIZE`, an estimate rather than a count
    pub total_players: usize,
    pub total_matches: u64,
    /// Percentage of matches won across the listed teams, 0 when none were played
    pub global_win_rate: f64,
}

impl KpiSummary {
    pub fn new(total_teams: usize, total_matches: u64, total_wins: u64) -> Self {
        Self {
            total_teams,
            total_players: total_teams * SQUAD_SIZE,
            total_matches,
            global_win_rate: if total_matches > 0 {
                (total_wins as f64 / total_matches as f64) * 100.0
            } else {
                0.0
            },
        }
    }
}
