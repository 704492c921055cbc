//! Filter, sort and aggregate pipeline behind the dashboard.
//!
//! Everything here is a pure function of the team list and a [`FilterSpec`];
//! callers are free to memoize on those two inputs.

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use crate::models::filters::{FilterSpec, SortBy, SortOrder};
use crate::models::kpi::KpiSummary;
use crate::models::team::Team;

/// Ordered teams plus the KPI summary computed over exactly those teams
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardView {
    pub teams: Vec<Team>,
    pub kpis: KpiSummary,
}

/// Runs the full pipeline: filter, sort, then aggregate the result
pub fn derive_view(teams: &[Team], spec: &FilterSpec) -> DashboardView {
    let teams = filter_teams(teams, spec);
    let kpis = compute_kpis(&teams);
    log::debug!(
        "Derived view: {} teams, {} matches, {:.2}% win rate",
        kpis.total_teams,
        kpis.total_matches,
        kpis.global_win_rate
    );
    DashboardView { teams, kpis }
}

/// Applies the category filter, the name search and the sort, in that order
pub fn filter_teams(teams: &[Team], spec: &FilterSpec) -> Vec<Team> {
    let query = spec.search_query.to_lowercase();

    let mut result: Vec<Team> = teams
        .iter()
        .filter(|team| spec.game.matches(team.game))
        .filter(|team| query.is_empty() || team.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    sort_teams(&mut result, spec.sort_by, spec.sort_order);
    result
}

/// Stable sort; teams with equal keys keep their relative order in both directions
pub fn sort_teams(teams: &mut [Team], sort_by: SortBy, sort_order: SortOrder) {
    teams.sort_by(|a, b| directed(compare_by(a, b, sort_by), sort_order));
}

/// Sums over the given teams; the rate falls back to 0 when no matches were played
pub fn compute_kpis(teams: &[Team]) -> KpiSummary {
    let total_matches: u64 = teams.iter().map(|t| u64::from(t.total_matches)).sum();
    let total_wins: u64 = teams.iter().map(|t| u64::from(t.wins)).sum();
    KpiSummary::new(teams.len(), total_matches, total_wins)
}

fn compare_by(a: &Team, b: &Team, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortBy::Wins => a.wins.cmp(&b.wins),
        SortBy::Losses => a.losses.cmp(&b.losses),
        // NaN compares equal to everything and is left where it falls
        SortBy::WinRate => a.win_rate.partial_cmp(&b.win_rate).unwrap_or(Ordering::Equal),
    }
}

fn directed(ordering: Ordering, sort_order: SortOrder) -> Ordering {
    match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
