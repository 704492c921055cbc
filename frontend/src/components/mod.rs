pub mod chart_renderer;
pub mod footer;
pub mod kpi_card;
pub mod navbar;
pub mod sidebar;
pub mod teams_table;
