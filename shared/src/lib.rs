pub mod models {
    pub mod team;
    pub mod filters;
    pub mod kpi;
    pub mod charts;
    pub mod preferences;
}

pub mod dataset;
pub mod engine;
pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    team::{Game, Team, YearlyStats},
    filters::{FilterSpec, GameFilter, SortBy, SortOrder},
    kpi::KpiSummary,
    charts::{ChartData, ChartDataContent, ChartSeries, ChartType, DataPoint},
    preferences::{MemoryBackend, PreferenceBackend, PreferenceStore, StorageError, StorageKey},
};

pub use dataset::{Dataset, DatasetIssue};
pub use engine::{compute_kpis, derive_view, filter_teams, sort_teams, DashboardView};
