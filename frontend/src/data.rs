use std::rc::Rc;
use anyhow::Context;
use shared::{Dataset, Team};

/// Team records bundled with the application at build time
pub const BUNDLED_TEAMS_JSON: &str = include_str!("../data/teams.json");

pub fn load_bundled_teams() -> anyhow::Result<Rc<[Team]>> {
    load_teams(BUNDLED_TEAMS_JSON)
}

pub fn load_teams(json: &str) -> anyhow::Result<Rc<[Team]>> {
    let dataset = Dataset::from_json(json).context("Failed to parse bundled team data")?;
    Ok(dataset.teams())
}
