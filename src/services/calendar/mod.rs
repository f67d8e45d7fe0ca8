//! Compliance calendar: month grid construction and month navigation.

mod grid;
mod navigation;

pub use grid::{
    build_grid, build_grid_with, weekday_labels, weeks_needed, CalendarCell, GridOptions,
    GRID_CELLS,
};
pub use navigation::{navigate, MonthNavigation};
