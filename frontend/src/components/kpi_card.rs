use yew::prelude::*;

/// Background gradient of the card's icon tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiGradient {
    Primary,
    Accent,
    Success,
    Warning,
}

impl KpiGradient {
    pub fn class(&self) -> &'static str {
        match self {
            KpiGradient::Primary => "gradient-primary",
            KpiGradient::Accent => "gradient-accent",
            KpiGradient::Success => "gradient-success",
            KpiGradient::Warning => "gradient-warning",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    pub gradient: KpiGradient,
    /// Entrance animation delay in milliseconds
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div
            class={classes!(
                "glass", "glass-border", "rounded-xl", "p-6", "card-shadow", "hover:card-shadow-hover",
                "transition-all", "duration-300", "hover:-translate-y-1", "animate-slide-up"
            )}
            style={format!("animation-delay: {}ms", props.delay_ms)}
        >
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <p class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-1">{ &props.title }</p>
                    <p class="text-3xl font-bold text-gray-900 dark:text-white">{ &props.value }</p>
                </div>
                <div class={classes!(
                    "w-12", "h-12", "rounded-xl", props.gradient.class(), "flex",
                    "items-center", "justify-center", "shadow-lg", "text-white", "text-2xl"
                )}>
                    { &props.icon }
                </div>
            </div>
        </div>
    }
}
