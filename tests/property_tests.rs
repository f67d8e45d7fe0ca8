// Property-based tests for the compliance grid, month navigation and filters
mod fixtures;

use ai_auditor::models::settings::GridRows;
use ai_auditor::models::transaction::TransactionStatus;
use ai_auditor::services::calendar::{
    build_grid, build_grid_with, navigate, weeks_needed, GridOptions, MonthNavigation, GRID_CELLS,
};
use ai_auditor::services::filter::RecordFilter;
use ai_auditor::services::fraud::{AmountFilter, DateFilter, TransactionFilter};
use ai_auditor::utils::date::days_in_month;
use chrono::{Datelike, Duration, NaiveDate};
use fixtures::{events, transactions};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let day = day.min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

fn any_status() -> impl Strategy<Value = TransactionStatus> {
    prop::sample::select(TransactionStatus::ALL.to_vec())
}

proptest! {
    /// Property: the default grid is always exactly five weeks
    #[test]
    fn prop_fixed_grid_has_35_cells(reference in any_date(), today in any_date()) {
        let grid = build_grid(reference, &[], today);
        prop_assert_eq!(grid.len(), GRID_CELLS);

        // Consecutive days starting on a Sunday
        prop_assert_eq!(grid[0].date.weekday(), chrono::Weekday::Sun);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    /// Property: a fitted grid shows every day of the month exactly once
    #[test]
    fn prop_fit_grid_covers_the_month(reference in any_date(), first_day in 0..7u8) {
        let options = GridOptions { rows: GridRows::Fit, first_day_of_week: first_day };
        let grid = build_grid_with(reference, &[], reference, options);

        prop_assert_eq!(grid.len(), weeks_needed(reference, first_day) * 7);
        prop_assert_eq!(grid[0].date.weekday().num_days_from_sunday(), u32::from(first_day));

        let in_month: Vec<u32> = grid
            .iter()
            .filter(|c| c.in_current_month)
            .map(|c| c.date.day())
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(reference.year(), reference.month())).collect();
        prop_assert_eq!(in_month, expected);
    }

    /// Property: events land in the cell of their date, and only inside the month
    #[test]
    fn prop_events_placed_once(reference in any_date(), offsets in prop::collection::vec(-40..70i64, 0..12)) {
        let first = reference.with_day(1).unwrap();
        let events: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(i, days)| events::compliance_event(i as u32 + 1, "Deadline", first + Duration::days(*days)))
            .collect();
        let grid = build_grid(reference, &events, reference);

        for event in &events {
            let hits = grid
                .iter()
                .filter(|cell| cell.events.iter().any(|e| e.id == event.id))
                .count();
            let shown_in_month = event.date.year() == reference.year()
                && event.date.month() == reference.month()
                && grid.iter().any(|cell| cell.date == event.date);
            prop_assert_eq!(hits, usize::from(shown_in_month));
        }
        prop_assert!(grid.iter().filter(|c| !c.in_current_month).all(|c| c.events.is_empty()));
    }

    /// Property: at most one cell is marked as today
    #[test]
    fn prop_at_most_one_today(reference in any_date(), today in any_date()) {
        let grid = build_grid(reference, &[], today);
        let marked = grid.iter().filter(|c| c.is_today).count();
        prop_assert!(marked <= 1);
        prop_assert_eq!(marked == 1, grid.iter().any(|c| c.in_current_month && c.date == today));
    }

    /// Property: a today that falls on a neighbouring month's placeholder day is never marked
    #[test]
    fn prop_today_in_adjacent_days_not_marked(reference in any_date(), index in 0..GRID_CELLS) {
        let grid = build_grid(reference, &[], reference);
        let today = grid[index].date;
        let grid = build_grid(reference, &[], today);

        let marked = grid.iter().filter(|c| c.is_today).count();
        prop_assert_eq!(marked, usize::from(grid[index].in_current_month));
        prop_assert!(grid.iter().filter(|c| !c.in_current_month).all(|c| !c.is_today));
    }

    /// Property: Next then Previous returns to the first of the starting month
    #[test]
    fn prop_next_then_previous_round_trips(current in any_date(), today in any_date()) {
        let next = navigate(current, MonthNavigation::Next, today);
        prop_assert_eq!(next.day(), 1);
        let back = navigate(next, MonthNavigation::Previous, today);
        prop_assert_eq!(back, current.with_day(1).unwrap());
    }

    /// Property: adding a predicate never grows the result
    #[test]
    fn prop_extra_predicate_narrows(
        rows in prop::collection::vec((0..60i64, 1.0..5000.0f64, any_status()), 0..20),
        status in any_status(),
        amount in prop::sample::select(AmountFilter::ALL.to_vec()),
        date in prop::sample::select(DateFilter::ALL.to_vec()),
    ) {
        let today = fixtures::dates::jan_15_2024();
        let data: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(i, (days_ago, value, st))| {
                transactions::transaction(i as u32, today - Duration::days(*days_ago), *value, *st)
            })
            .collect();

        let base = TransactionFilter { status: Some(status), ..Default::default() };
        let narrower = TransactionFilter { amount, date, ..base.clone() };

        let broad = base.apply(&data, today);
        let narrow = narrower.apply(&data, today);
        prop_assert!(narrow.len() <= broad.len());
        prop_assert!(narrow.iter().all(|t| broad.iter().any(|b| b.id == t.id)));
    }
}
