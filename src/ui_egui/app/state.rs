use crate::models::route::Route;
use crate::services::compliance::ComplianceViewState;
use crate::services::cost::SuggestionFilter;
use crate::services::fraud::TransactionFilter;
use crate::services::grants::GrantFilter;
use crate::services::reports::ReportsViewState;
use crate::ui_egui::views::auth::AuthFormState;
use chrono::NaiveDate;

/// Everything the views mutate between frames. Each view owns one record.
pub struct AppState {
    pub route: Route,
    pub sidebar_open: bool,
    pub compliance: ComplianceViewState,
    pub fraud_filter: TransactionFilter,
    pub cost_filter: SuggestionFilter,
    pub grant_filter: GrantFilter,
    pub reports: ReportsViewState,
    pub auth_form: AuthFormState,
}

impl AppState {
    pub fn new(route: Route, sidebar_open: bool, today: NaiveDate) -> Self {
        Self {
            route,
            sidebar_open,
            compliance: ComplianceViewState::new(today),
            fraud_filter: TransactionFilter::default(),
            cost_filter: SuggestionFilter::default(),
            grant_filter: GrantFilter::default(),
            reports: ReportsViewState::default(),
            auth_form: AuthFormState::default(),
        }
    }

    /// Sidebar is part of the dashboard shell only
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_open && self.route.uses_dashboard_shell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_new_state_starts_on_reference_month() {
        let state = AppState::new(Route::Dashboard, true, today());
        assert_eq!(state.compliance.reference_month, today());
        assert!(!state.fraud_filter.is_active());
    }

    #[test]
    fn test_sidebar_hidden_outside_shell() {
        let mut state = AppState::new(Route::Landing, true, today());
        assert!(!state.sidebar_visible());

        state.route = Route::GrantOpportunities;
        assert!(state.sidebar_visible());

        state.sidebar_open = false;
        assert!(!state.sidebar_visible());
    }
}
