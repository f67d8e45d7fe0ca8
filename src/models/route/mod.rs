// Route module
// Path mapping for every view in the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    #[default]
    Landing,
    Login,
    Signup,
    Dashboard,
    FinancialReports,
    ComplianceCenter,
    FraudDetection,
    CostOptimization,
    GrantOpportunities,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Landing,
        Route::Login,
        Route::Signup,
        Route::Dashboard,
        Route::FinancialReports,
        Route::ComplianceCenter,
        Route::FraudDetection,
        Route::CostOptimization,
        Route::GrantOpportunities,
    ];

    /// Routes listed in the dashboard sidebar, in display order
    pub const NAVIGATION: [Route; 6] = [
        Route::Dashboard,
        Route::FinancialReports,
        Route::ComplianceCenter,
        Route::FraudDetection,
        Route::CostOptimization,
        Route::GrantOpportunities,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::FinancialReports => "/financial-reports",
            Route::ComplianceCenter => "/compliance-center",
            Route::FraudDetection => "/fraud-detection",
            Route::CostOptimization => "/cost-optimization",
            Route::GrantOpportunities => "/grant-opportunities",
        }
    }

    /// Resolve a path, tolerating a single trailing slash
    pub fn from_path(path: &str) -> Result<Self, ModelError> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| ModelError::UnknownRoute(path.to_string()))
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "AI-Auditor",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Dashboard => "Dashboard",
            Route::FinancialReports => "Financial Reports",
            Route::ComplianceCenter => "Compliance Center",
            Route::FraudDetection => "Fraud Detection",
            Route::CostOptimization => "Cost Optimization",
            Route::GrantOpportunities => "Grant Opportunities",
        }
    }

    /// Whether the view renders inside the dashboard shell (top bar + sidebar)
    pub fn uses_dashboard_shell(self) -> bool {
        !matches!(self, Route::Landing | Route::Login | Route::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}

impl TryFrom<String> for Route {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_path(&value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_every_route_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test_case("/" => Route::Landing ; "root")]
    #[test_case("/dashboard/" => Route::Dashboard ; "trailing slash")]
    #[test_case(" /fraud-detection " => Route::FraudDetection ; "surrounding whitespace")]
    fn test_from_path_normalizes(path: &str) -> Route {
        Route::from_path(path).unwrap()
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(
            Route::from_path("/settings"),
            Err(ModelError::UnknownRoute("/settings".into()))
        );
    }

    #[test]
    fn test_shell_membership() {
        assert!(!Route::Login.uses_dashboard_shell());
        assert!(Route::NAVIGATION.iter().all(|r| r.uses_dashboard_shell()));
    }

    #[test]
    fn test_serde_as_path() {
        let json = serde_json::to_string(&Route::CostOptimization).unwrap();
        assert_eq!(json, "\"/cost-optimization\"");
        let route: Route = serde_json::from_str("\"/compliance-center\"").unwrap();
        assert_eq!(route, Route::ComplianceCenter);
    }
}
