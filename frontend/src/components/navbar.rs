use yew::prelude::*;
use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "glass", "glass-border", "card-shadow", "backdrop-blur-sm"
        )}>
            <div class={classes!("max-w-screen-2xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "items-center", "justify-between", "h-16")}>
                    // Logo and title
                    <div class={classes!("flex", "items-center", "gap-3", "animate-fade-in")}>
                        <div class={classes!(
                            "w-10", "h-10", "rounded-xl", "gradient-primary", "flex",
                            "items-center", "justify-center", "shadow-lg", "text-white", "text-xl"
                        )}>
                            {"🏆"}
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-gray-900 dark:text-white">{ Config::app_title() }</h1>
                            <p class="text-xs text-gray-500 dark:text-gray-400">{ Config::app_subtitle() }</p>
                        </div>
                    </div>

                    <button
                        onclick={on_click}
                        class={classes!(
                            "p-2.5", "rounded-xl", "glass-border", "hover:bg-gray-100",
                            "dark:hover:bg-gray-700", "transition-all", "duration-200", "text-xl"
                        )}
                        aria-label="Toggle theme"
                        title={if props.dark_mode { "Switch to light mode" } else { "Switch to dark mode" }}
                    >
                        { if props.dark_mode { "☀️" } else { "🌙" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}
