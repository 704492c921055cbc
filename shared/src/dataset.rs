//! Loading and sanity-checking the bundled team dataset.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use chrono::Datelike;
use log::{info, warn};
use validator::Validate;
use crate::error::{Result, SharedError};
use crate::models::team::Team;

/// Largest gap tolerated between a stored win rate and the one implied by wins/matches
const WIN_RATE_TOLERANCE: f64 = 0.01;

/// A non-fatal finding about one record of the dataset
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetIssue {
    Invalid { team_id: String, reason: String },
    MatchCountMismatch { team_id: String, total_matches: u32, wins_plus_losses: u32 },
    WinRateMismatch { team_id: String, stored: f64, computed: f64 },
    DuplicateYear { team_id: String, year: i32 },
    DuplicateId { team_id: String },
    FoundedInFuture { team_id: String, founded: i32 },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::Invalid { team_id, reason } => {
                write!(f, "team {} failed validation: {}", team_id, reason)
            }
            DatasetIssue::MatchCountMismatch { team_id, total_matches, wins_plus_losses } => write!(
                f,
                "team {} has totalMatches {} but wins + losses = {}",
                team_id, total_matches, wins_plus_losses
            ),
            DatasetIssue::WinRateMismatch { team_id, stored, computed } => write!(
                f,
                "team {} has winRate {:.2} but wins / totalMatches gives {:.2}",
                team_id, stored, computed
            ),
            DatasetIssue::DuplicateYear { team_id, year } => {
                write!(f, "team {} lists year {} more than once", team_id, year)
            }
            DatasetIssue::DuplicateId { team_id } => write!(f, "team id {} is not unique", team_id),
            DatasetIssue::FoundedInFuture { team_id, founded } => {
                write!(f, "team {} was founded in {}, which is in the future", team_id, founded)
            }
        }
    }
}

/// The fixed, read-only team list the dashboard works from
#[derive(Debug, Clone)]
pub struct Dataset {
    teams: Rc<[Team]>,
    issues: Vec<DatasetIssue>,
}

impl Dataset {
    /// Parses a JSON array of teams. Records are kept even when they have
    /// issues; those are logged and available from [`Dataset::issues`].
    pub fn from_json(json: &str) -> Result<Self> {
        let teams: Vec<Team> = serde_json::from_str(json)?;
        Ok(Self::from_teams(teams))
    }

    pub fn from_teams(teams: Vec<Team>) -> Self {
        let current_year = chrono::Utc::now().year();
        let issues = check_teams(&teams, current_year);
        for issue in &issues {
            warn!("Dataset issue: {}", issue);
        }
        info!("Loaded {} teams ({} issues)", teams.len(), issues.len());

        Self {
            teams: teams.into(),
            issues,
        }
    }

    /// Shared handle to the teams, in load order
    pub fn teams(&self) -> Rc<[Team]> {
        Rc::clone(&self.teams)
    }

    pub fn issues(&self) -> &[DatasetIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Checks the conventions the dataset is expected to follow without enforcing them
pub fn check_teams(teams: &[Team], current_year: i32) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for team in teams {
        let team_id = team.id.clone();

        if let Err(e) = team.validate().map_err(SharedError::from) {
            issues.push(DatasetIssue::Invalid { team_id: team_id.clone(), reason: e.to_string() });
        }

        if !seen_ids.insert(team.id.as_str()) {
            issues.push(DatasetIssue::DuplicateId { team_id: team_id.clone() });
        }

        let wins_plus_losses = team.wins.saturating_add(team.losses);
        if team.total_matches != wins_plus_losses {
            issues.push(DatasetIssue::MatchCountMismatch {
                team_id: team_id.clone(),
                total_matches: team.total_matches,
                wins_plus_losses,
            });
        }

        if team.total_matches > 0 {
            let computed = f64::from(team.wins) * 100.0 / f64::from(team.total_matches);
            if (computed - team.win_rate).abs() > WIN_RATE_TOLERANCE {
                issues.push(DatasetIssue::WinRateMismatch {
                    team_id: team_id.clone(),
                    stored: team.win_rate,
                    computed,
                });
            }
        }

        let mut seen_years = HashSet::new();
        for stats in &team.yearly_stats {
            if !seen_years.insert(stats.year) {
                issues.push(DatasetIssue::DuplicateYear { team_id: team_id.clone(), year: stats.year });
            }
        }

        if team.founded > current_year {
            issues.push(DatasetIssue::FoundedInFuture { team_id, founded: team.founded });
        }
    }

    issues
}
