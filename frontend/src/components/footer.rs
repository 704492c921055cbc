use yew::prelude::*;
use crate::config::Config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="mt-12 py-6 text-center text-sm text-gray-600 dark:text-gray-400">
            <p>{ Config::footer_text() }</p>
        </footer>
    }
}
