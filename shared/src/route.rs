use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Pages reachable from the sidebar, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, Display)]
pub enum Route {
    Dashboard,
    Analyze,
    Jobs,
    Agents,
    Reports,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Analyze => "/analyze",
            Route::Jobs => "/jobs",
            Route::Agents => "/agents",
            Route::Reports => "/reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Analyze => "Analyze",
            Route::Jobs => "Jobs",
            Route::Agents => "Agents",
            Route::Reports => "Reports",
        }
    }

    /// Maps a location pathname to a page. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::iter().find(|route| route.path() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path(""), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/analyze"), Some(Route::Analyze));
        assert_eq!(Route::from_path("/reports/"), Some(Route::Reports));
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path("/jobs/42"), None);
    }

    #[test]
    fn test_every_route_round_trips_through_its_path() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::iter().count(), 5);
    }
}
