//! Reusable Dioxus RSX components for Social Pulse page apps.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod filter_select;
mod kpi_card;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use filter_select::FilterSelect;
pub use kpi_card::KpiCard;
pub use loading_spinner::LoadingSpinner;
