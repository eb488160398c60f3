//! UI Components
//!
//! Leptos components of the irrigation calendar.

mod month_navigator;
mod schedule_table;
mod plant_row;
mod attribute_cell;
mod toolbar;
mod log_panel;

pub use month_navigator::MonthNavigator;
pub use schedule_table::ScheduleTable;
pub use plant_row::PlantRow;
pub use attribute_cell::AttributeCell;
pub use toolbar::Toolbar;
pub use log_panel::LogPanel;
