use std::rc::Rc;
use log::debug;
use shared::models::charts::{team_ranking, win_loss_ratio, wins_evolution};
use shared::{derive_view, ChartData, FilterSpec, KpiSummary, Team};
use yew::prelude::*;
use crate::components::chart_renderer::ChartRenderer;
use crate::components::kpi_card::{KpiCard, KpiGradient};
use crate::components::teams_table::TeamsTable;
use crate::format::{percent, thousands};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub teams: Rc<[Team]>,
    pub filters: FilterSpec,
}

/// Everything rendered below the navbar for one filter state
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub teams: Rc<Vec<Team>>,
    pub kpis: KpiSummary,
    pub charts: [ChartData; 3],
}

impl DashboardModel {
    pub fn build(teams: &[Team], filters: &FilterSpec) -> Self {
        let view = derive_view(teams, filters);
        let charts = [
            wins_evolution(&view.teams),
            team_ranking(&view.teams),
            win_loss_ratio(&view.teams),
        ];
        Self {
            teams: Rc::new(view.teams),
            kpis: view.kpis,
            charts,
        }
    }
}

/// Title, formatted value, icon and gradient of the four KPI cards
pub fn kpi_cards(kpis: &KpiSummary) -> [(&'static str, String, &'static str, KpiGradient); 4] {
    [
        ("Total Teams", kpis.total_teams.to_string(), "👥", KpiGradient::Primary),
        ("Total Players", kpis.total_players.to_string(), "🎯", KpiGradient::Accent),
        ("Matches Played", thousands(kpis.total_matches), "🏆", KpiGradient::Success),
        ("Global Win Rate", percent(kpis.global_win_rate), "📈", KpiGradient::Warning),
    ]
}

fn chart_panel() -> Classes {
    classes!("glass", "glass-border", "rounded-xl", "p-6", "card-shadow", "animate-slide-up")
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let model = use_memo((props.teams.clone(), props.filters.clone()), |(teams, filters)| {
        debug!("Recomputing dashboard for {:?}", filters);
        DashboardModel::build(teams, filters)
    });

    let cards = kpi_cards(&model.kpis)
        .into_iter()
        .enumerate()
        .map(|(i, (title, value, icon, gradient))| {
            html! {
                <KpiCard
                    key={title}
                    {title}
                    {value}
                    {icon}
                    {gradient}
                    delay_ms={i as u32 * 100}
                />
            }
        });

    let [evolution, ranking, ratio] = model.charts.clone();

    html! {
        <div class="space-y-6 animate-fade-in">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for cards }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartRenderer chart={evolution} class={classes!(chart_panel(), "lg:col-span-2")} />
                <ChartRenderer chart={ranking} class={chart_panel()} />
                <ChartRenderer chart={ratio} class={chart_panel()} />
            </div>

            <TeamsTable teams={model.teams.clone()} />
        </div>
    }
}
