pub struct Config;

impl Config {
    pub fn log_level() -> log::Level {
        // Debug builds log engine recomputations and filter changes too
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    pub fn app_title() -> &'static str {
        "E-sports Analytics"
    }

    pub fn app_subtitle() -> &'static str {
        "Professional Dashboard"
    }

    pub fn footer_text() -> &'static str {
        "E-sports Analytics Dashboard © 2024"
    }
}
