use std::rc::Rc;
use yew::prelude::*;
use yew::functional::use_reducer_eq;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use shared::{FilterSpec, Team};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::config::Config;
use crate::pages::dashboard::Dashboard;
use crate::state::{DashboardAction, DashboardState};
use crate::storage::{browser_store, prefers_dark_color_scheme};

pub mod components;
pub mod config;
pub mod data;
pub mod format;
pub mod state;
pub mod storage;
pub mod pages {
    pub mod dashboard;
}


/// Bundled dataset as loaded at startup, kept by the shell for the whole session
type TeamsResult = Result<Rc<[Team]>, String>;

/// Adds or removes the `dark` class on `<html>`
fn apply_theme(dark_mode: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        warn!("No document element to apply the theme to");
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", dark_mode) {
        warn!("Failed to apply theme class: {:?}", e);
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");

    let teams = use_memo((), |_| -> TeamsResult {
        data::load_bundled_teams().map_err(|e| {
            error!("Failed to load team data: {:#}", e);
            format!("{:#}", e)
        })
    });

    let state = use_reducer_eq(|| {
        let store = browser_store();
        DashboardState::new(
            store.get_theme_flag(prefers_dark_color_scheme),
            store.get_filter_spec(),
        )
    });

    use_effect_with(state.dark_mode, |dark_mode| {
        apply_theme(*dark_mode);
        || ()
    });

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let dark_mode = !state.dark_mode;
            state.dispatch(DashboardAction::ToggleTheme);
            browser_store().save_theme_flag(dark_mode);
        })
    };

    let on_filters_change = {
        let state = state.clone();
        Callback::from(move |filters: FilterSpec| {
            browser_store().save_filter_spec(&filters);
            state.dispatch(DashboardAction::SetFilters(filters));
        })
    };

    let content = match &*teams {
        Ok(teams) => html! {
            <Dashboard teams={Rc::clone(teams)} filters={state.filters.clone()} />
        },
        Err(message) => html! { <LoadError message={message.clone()} /> },
    };

    html! {
        <div class={classes!(
            "min-h-screen", "flex", "flex-col", "bg-gradient-to-br", "from-gray-50", "via-blue-50",
            "to-purple-50", "dark:from-gray-900", "dark:via-blue-950", "dark:to-purple-950",
            "transition-colors", "duration-300"
        )}>
            <Navbar dark_mode={state.dark_mode} {on_toggle_theme} />
            <div class="max-w-screen-2xl w-full mx-auto flex-1">
                <div class="flex gap-6 p-6">
                    <Sidebar filters={state.filters.clone()} {on_filters_change} />
                    <main class="flex-1 min-w-0">
                        { content }
                    </main>
                </div>
            </div>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LoadErrorProps {
    message: String,
}

#[function_component(LoadError)]
fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <div class="glass glass-border rounded-xl p-8 text-center card-shadow" role="alert">
            <h2 class="text-lg font-semibold text-red-600 dark:text-red-400 mb-2">{"Team data could not be loaded"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400 font-mono">{ &props.message }</p>
        </div>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    info!("Initializing application...");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application to body");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Start function that Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
