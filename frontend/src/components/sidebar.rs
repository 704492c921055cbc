use shared::{FilterSpec, GameFilter, SortBy, SortOrder};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub filters: FilterSpec,
    pub on_filters_change: Callback<FilterSpec>,
}

/// Button text for a category choice
pub fn game_filter_label(filter: &GameFilter) -> &'static str {
    match filter {
        GameFilter::All => "All games",
        GameFilter::Only(game) => game.as_str(),
    }
}

fn choice_classes(active: bool, active_color: &'static str) -> Classes {
    if active {
        classes!(active_color, "text-white", "shadow-lg")
    } else {
        classes!(
            "glass-border", "hover:bg-gray-100", "dark:hover:bg-gray-700",
            "text-gray-700", "dark:text-gray-300"
        )
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let filters = &props.filters;

    let on_search = {
        let filters = filters.clone();
        let on_filters_change = props.on_filters_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_filters_change.emit(filters.with_search_query(input.value()));
        })
    };

    let game_buttons = GameFilter::choices().map(|choice| {
        let active = filters.game == choice;
        let onclick = {
            let filters = filters.clone();
            let on_filters_change = props.on_filters_change.clone();
            Callback::from(move |_: MouseEvent| on_filters_change.emit(filters.with_game(choice)))
        };
        html! {
            <button
                key={choice.as_str()}
                {onclick}
                class={classes!(
                    "w-full", "text-left", "px-4", "py-2.5", "rounded-lg", "transition-all", "duration-200",
                    choice_classes(active, "bg-primary-500")
                )}
            >
                <span class="text-sm font-medium">{ game_filter_label(&choice) }</span>
            </button>
        }
    });

    let sort_buttons = SortBy::ALL.iter().copied().map(|sort_by| {
        let onclick = {
            let filters = filters.clone();
            let on_filters_change = props.on_filters_change.clone();
            Callback::from(move |_: MouseEvent| on_filters_change.emit(filters.with_sort_by(sort_by)))
        };
        html! {
            <button
                key={sort_by.to_string()}
                {onclick}
                class={classes!(
                    "px-3", "py-2", "rounded-lg", "text-sm", "font-medium", "transition-all", "duration-200",
                    choice_classes(filters.sort_by == sort_by, "bg-accent-500")
                )}
            >
                { sort_by.to_string() }
            </button>
        }
    });

    let order_buttons = SortOrder::ALL.iter().copied().map(|sort_order| {
        let onclick = {
            let filters = filters.clone();
            let on_filters_change = props.on_filters_change.clone();
            Callback::from(move |_: MouseEvent| on_filters_change.emit(filters.with_sort_order(sort_order)))
        };
        html! {
            <button
                key={sort_order.to_string()}
                {onclick}
                class={classes!(
                    "px-3", "py-2", "rounded-lg", "text-sm", "font-medium", "transition-all", "duration-200",
                    choice_classes(filters.sort_order == sort_order, "bg-primary-500")
                )}
            >
                { sort_order.to_string() }
            </button>
        }
    });

    html! {
        <aside class="w-72 shrink-0 glass glass-border card-shadow rounded-xl animate-slide-down">
            <div class="p-6 space-y-6">
                <div class="flex items-center gap-2 pb-4 border-b border-gray-200 dark:border-gray-700">
                    <span class="text-primary-600 dark:text-primary-400">{"⚙"}</span>
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{"Filters"}</h2>
                </div>

                // Search
                <div>
                    <label for="team-search" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        {"Search team"}
                    </label>
                    <input
                        id="team-search"
                        type="text"
                        value={filters.search_query.clone()}
                        oninput={on_search}
                        placeholder="Team name..."
                        class={classes!(
                            "w-full", "px-4", "py-2.5", "rounded-lg", "glass-border", "bg-white",
                            "dark:bg-gray-800", "text-gray-900", "dark:text-white", "placeholder-gray-400",
                            "focus:outline-none", "focus:ring-2", "focus:ring-primary-500", "transition-all"
                        )}
                    />
                </div>

                // Category
                <div>
                    <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{"Game"}</span>
                    <div class="space-y-2">{ for game_buttons }</div>
                </div>

                // Sort field
                <div>
                    <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{"Sort by"}</span>
                    <div class="grid grid-cols-2 gap-2">{ for sort_buttons }</div>
                </div>

                // Direction
                <div>
                    <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{"Order"}</span>
                    <div class="grid grid-cols-2 gap-2">{ for order_buttons }</div>
                </div>
            </div>
        </aside>
    }
}
