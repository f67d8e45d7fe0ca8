use super::AuditorApp;
use crate::models::route::Route;
use crate::services::calendar::MonthNavigation;
use crate::services::compliance::ComplianceAction;

impl AuditorApp {
    pub(super) fn navigate_to(&mut self, route: Route) {
        if route == self.state.route {
            return;
        }
        log::debug!("Navigating {} -> {}", self.state.route, route);

        if matches!(route, Route::Login | Route::Signup) {
            self.state.auth_form.error = None;
        }
        self.state.route = route;
    }

    pub(super) fn apply_compliance_action(&mut self, action: ComplianceAction) {
        self.state.compliance.apply(action, self.today);
    }

    pub(super) fn navigate_month(&mut self, step: MonthNavigation) {
        self.apply_compliance_action(ComplianceAction::Navigate(step));
    }

    pub(super) fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
    }
}
