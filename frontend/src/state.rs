use std::rc::Rc;
use log::debug;
use shared::FilterSpec;
use yew::prelude::*;

/// UI state owned by the application shell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub dark_mode: bool,
    pub filters: FilterSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    ToggleTheme,
    SetFilters(FilterSpec),
}

impl DashboardState {
    pub fn new(dark_mode: bool, filters: FilterSpec) -> Self {
        Self { dark_mode, filters }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::ToggleTheme => {
                debug!("Theme toggled, dark mode now {}", !self.dark_mode);
                Rc::new(Self {
                    dark_mode: !self.dark_mode,
                    filters: self.filters.clone(),
                })
            }
            DashboardAction::SetFilters(filters) => {
                if filters == self.filters {
                    return self;
                }
                debug!("Filters changed: {:?}", filters);
                Rc::new(Self {
                    dark_mode: self.dark_mode,
                    filters,
                })
            }
        }
    }
}
