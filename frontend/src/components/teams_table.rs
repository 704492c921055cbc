use std::rc::Rc;
use shared::{Game, Team};
use yew::prelude::*;
use crate::format::percent;

pub const EMPTY_MESSAGE: &str = "No teams match the selected filters.";

#[derive(Properties, PartialEq)]
pub struct TeamsTableProps {
    pub teams: Rc<Vec<Team>>,
}

/// Badge colours per title
pub fn game_badge_classes(game: Game) -> &'static str {
    match game {
        Game::LeagueOfLegends => "bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-400",
        Game::CounterStrike2 => "bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-400",
        Game::Dota2 => "bg-red-100 text-red-700 dark:bg-red-900/30 dark:text-red-400",
        Game::Valorant => "bg-purple-100 text-purple-700 dark:bg-purple-900/30 dark:text-purple-400",
        Game::Overwatch2 => "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-400",
    }
}

/// Text colour tier for a win rate
pub fn win_rate_classes(win_rate: f64) -> &'static str {
    if win_rate >= 70.0 {
        "text-green-600 dark:text-green-400 font-bold"
    } else if win_rate >= 60.0 {
        "text-blue-600 dark:text-blue-400 font-semibold"
    } else if win_rate >= 50.0 {
        "text-yellow-600 dark:text-yellow-400"
    } else {
        "text-red-600 dark:text-red-400"
    }
}

pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "1 team found".to_string(),
        n => format!("{} teams found", n),
    }
}

const HEADER_CLASSES: &str =
    "px-6 py-4 text-xs font-semibold text-gray-700 dark:text-gray-300 uppercase tracking-wider";

fn team_row(team: &Team) -> Html {
    html! {
        <tr key={team.id.clone()} class="hover:bg-gray-50 dark:hover:bg-gray-800/50 transition-colors duration-150">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-3">
                    <div class={classes!(
                        "w-10", "h-10", "rounded-lg", "bg-gradient-to-br", "from-primary-500", "to-primary-600",
                        "flex", "items-center", "justify-center", "text-white", "font-bold", "text-sm", "shadow-lg"
                    )}>
                        { team.initials() }
                    </div>
                    <div>
                        <div class="text-sm font-semibold text-gray-900 dark:text-white">{ &team.name }</div>
                        <div class="text-xs text-gray-500 dark:text-gray-400">{ format!("Founded in {}", team.founded) }</div>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class={classes!("inline-flex", "px-3", "py-1", "rounded-full", "text-xs", "font-medium", game_badge_classes(team.game))}>
                    { team.game.as_str() }
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300">{ &team.region }</td>
            <td class="px-6 py-4 whitespace-nowrap text-center text-sm font-semibold text-green-600 dark:text-green-400">{ team.wins }</td>
            <td class="px-6 py-4 whitespace-nowrap text-center text-sm font-semibold text-red-600 dark:text-red-400">{ team.losses }</td>
            <td class="px-6 py-4 whitespace-nowrap text-center text-sm text-gray-700 dark:text-gray-300">{ team.total_matches }</td>
            <td class="px-6 py-4 whitespace-nowrap text-center">
                <span class={classes!("text-sm", win_rate_classes(team.win_rate))}>{ percent(team.win_rate) }</span>
            </td>
        </tr>
    }
}

#[function_component(TeamsTable)]
pub fn teams_table(props: &TeamsTableProps) -> Html {
    let teams = &props.teams;

    html! {
        <div class="glass glass-border rounded-xl card-shadow overflow-hidden animate-slide-up" style="animation-delay: 500ms">
            <div class="p-6 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{"E-sports Teams"}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 mt-1">{ result_count_label(teams.len()) }</p>
            </div>

            if teams.is_empty() {
                <div class="p-12 text-center">
                    <p class="text-gray-500 dark:text-gray-400">{ EMPTY_MESSAGE }</p>
                </div>
            } else {
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50 dark:bg-gray-800/50">
                            <tr>
                                <th class={classes!(HEADER_CLASSES, "text-left")}>{"Team"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-left")}>{"Game"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-left")}>{"Region"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-center")}>{"Wins"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-center")}>{"Losses"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-center")}>{"Matches"}</th>
                                <th class={classes!(HEADER_CLASSES, "text-center")}>{"Win Rate"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            { for teams.iter().map(team_row) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
