use chrono::{Datelike, Duration, NaiveDate};

use crate::models::compliance::ComplianceEvent;
use crate::models::settings::GridRows;
use crate::utils::date::{days_in_month, first_of_month, is_same_month, weekday_offset};

/// Cells in the fixed five-week grid
pub const GRID_CELLS: usize = 35;

const DAYS_PER_WEEK: usize = 7;

/// One day slot in the month grid.
///
/// Adjacent-month placeholders never carry events and are never marked as today.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell<'a> {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    /// Events on `date`, in source order. Always empty outside the current month.
    pub events: Vec<&'a ComplianceEvent>,
}

impl<'a> CalendarCell<'a> {
    /// The events a cell shows before collapsing the rest
    pub fn visible_events(&self, max: usize) -> &[&'a ComplianceEvent] {
        &self.events[..self.events.len().min(max)]
    }

    pub fn overflow_count(&self, max: usize) -> usize {
        self.events.len().saturating_sub(max)
    }

    /// "+N more" when events were collapsed
    pub fn overflow_label(&self, max: usize) -> Option<String> {
        match self.overflow_count(max) {
            0 => None,
            hidden => Some(format!("+{} more", hidden)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridOptions {
    pub rows: GridRows,
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
}

/// Build the fixed 35-cell, Sunday-first grid for `reference`'s month.
///
/// Cells run from the Sunday on or before the first of the month. Days of
/// adjacent months are included as placeholders without events, and months
/// that need a sixth week lose their trailing days.
pub fn build_grid<'a>(
    reference: NaiveDate,
    events: &'a [ComplianceEvent],
    today: NaiveDate,
) -> Vec<CalendarCell<'a>> {
    build_grid_with(reference, events, today, GridOptions::default())
}

pub fn build_grid_with<'a>(
    reference: NaiveDate,
    events: &'a [ComplianceEvent],
    today: NaiveDate,
    options: GridOptions,
) -> Vec<CalendarCell<'a>> {
    let first = first_of_month(reference);
    let offset = i64::from(weekday_offset(first, options.first_day_of_week));
    let cell_count = match options.rows {
        GridRows::Fixed => GRID_CELLS,
        GridRows::Fit => weeks_needed(reference, options.first_day_of_week) * DAYS_PER_WEEK,
    };

    (0..cell_count)
        .map(|index| {
            let date = first + Duration::days(index as i64 - offset);
            let in_current_month = is_same_month(date, reference);
            let day_events = if in_current_month {
                events.iter().filter(|event| event.is_on(date)).collect()
            } else {
                Vec::new()
            };

            CalendarCell {
                date,
                in_current_month,
                is_today: in_current_month && date == today,
                events: day_events,
            }
        })
        .collect()
}

/// Week rows needed to show every day of `reference`'s month
pub fn weeks_needed(reference: NaiveDate, first_day_of_week: u8) -> usize {
    let first = first_of_month(reference);
    let leading = weekday_offset(first, first_day_of_week) as usize;
    let days = days_in_month(reference.year(), reference.month()) as usize;
    (leading + days).div_ceil(DAYS_PER_WEEK)
}

pub fn weekday_labels(first_day_of_week: u8) -> [&'static str; 7] {
    const ALL_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = usize::from(first_day_of_week % 7);
    std::array::from_fn(|i| ALL_DAYS[(start + i) % DAYS_PER_WEEK])
}
