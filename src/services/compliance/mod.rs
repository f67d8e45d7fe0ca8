//! Compliance center: summary counts, the deadline list and the view state reducer.

use chrono::NaiveDate;

use crate::models::compliance::{ComplianceEvent, ComplianceStatus, Priority};
use crate::services::calendar::{navigate, MonthNavigation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub high_priority: usize,
}

impl ComplianceSummary {
    pub fn from_events(events: &[ComplianceEvent]) -> Self {
        Self {
            total: events.len(),
            pending: events
                .iter()
                .filter(|e| e.status == ComplianceStatus::Pending)
                .count(),
            completed: events.iter().filter(|e| e.is_completed()).count(),
            high_priority: events.iter().filter(|e| e.priority == Priority::High).count(),
        }
    }
}

/// Outstanding events, earliest first; ties keep source order.
pub fn upcoming_deadlines(events: &[ComplianceEvent]) -> Vec<&ComplianceEvent> {
    let mut outstanding: Vec<&ComplianceEvent> =
        events.iter().filter(|e| !e.is_completed()).collect();
    outstanding.sort_by_key(|e| e.date);
    outstanding
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplianceViewMode {
    #[default]
    Calendar,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceAction {
    Navigate(MonthNavigation),
    SetMode(ComplianceViewMode),
}

/// State owned by the compliance center view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceViewState {
    pub reference_month: NaiveDate,
    pub mode: ComplianceViewMode,
}

impl ComplianceViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference_month: today,
            mode: ComplianceViewMode::Calendar,
        }
    }

    pub fn apply(&mut self, action: ComplianceAction, today: NaiveDate) {
        match action {
            ComplianceAction::Navigate(step) => {
                self.reference_month = navigate(self.reference_month, step, today);
                log::debug!(
                    "Compliance calendar moved to {}",
                    self.reference_month.format("%B %Y")
                );
            }
            ComplianceAction::SetMode(mode) => self.mode = mode,
        }
    }
}
