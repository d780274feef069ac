/// Logical page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    Dashboard,
    Saved,
    Digest,
    Settings,
    Proof,
    /// Terminal fallback for any path outside the table.
    NotFound,
}

/// Canonical path for every addressable route. `NotFound` has none.
pub const ROUTE_TABLE: [(Route, &str); 6] = [
    (Route::Landing, "/"),
    (Route::Dashboard, "/dashboard"),
    (Route::Saved, "/saved"),
    (Route::Digest, "/digest"),
    (Route::Settings, "/settings"),
    (Route::Proof, "/proof"),
];

/// Exact-match lookup against [`ROUTE_TABLE`].
pub fn resolve(path: &str) -> Route {
    ROUTE_TABLE
        .iter()
        .find(|(_, candidate)| *candidate == path)
        .map_or(Route::NotFound, |(route, _)| *route)
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::Dashboard,
        Route::Saved,
        Route::Digest,
        Route::Settings,
        Route::Proof,
        Route::NotFound,
    ];

    /// Routes shown in the top navigation, in display order.
    pub const NAV: [Route; 5] = [
        Route::Dashboard,
        Route::Saved,
        Route::Digest,
        Route::Settings,
        Route::Proof,
    ];

    /// Stable identifier used for `data-route` markers and history state.
    pub fn id(self) -> &'static str {
        match self {
            Route::Landing => "landing",
            Route::Dashboard => "dashboard",
            Route::Saved => "saved",
            Route::Digest => "digest",
            Route::Settings => "settings",
            Route::Proof => "proof",
            Route::NotFound => "not-found",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.id() == id)
    }

    pub fn path(self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(route, _)| *route == self)
            .map(|(_, path)| *path)
    }

    /// Route for a history entry: the recorded state wins over the path.
    pub fn from_history(state: Option<&str>, path: &str) -> Self {
        state
            .and_then(Self::from_id)
            .unwrap_or_else(|| resolve(path))
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Stop Missing The Right Jobs.",
            Route::Dashboard => "Dashboard",
            Route::Saved => "Saved Jobs",
            Route::Digest => "Daily Digest",
            Route::Settings => "Settings",
            Route::Proof => "Proof of Work",
            Route::NotFound => "Page Not Found",
        }
    }

    pub fn subtext(self) -> &'static str {
        match self {
            Route::Landing => "Precision-matched job discovery delivered daily at 9AM.",
            Route::Dashboard => {
                "Browse every tracked role, filter it down, and sort by what matters."
            }
            Route::Saved => "Roles you bookmarked stay here across sessions.",
            Route::Digest => "Your top matches for today, ranked by relevance.",
            Route::Settings => "Tell the tracker what a good match looks like for you.",
            Route::Proof => "What done should eventually mean for this workspace.",
            Route::NotFound => "The page you are looking for does not exist.",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::Saved => "Saved",
            Route::Digest => "Digest",
            Route::Settings => "Settings",
            Route::Proof => "Proof",
            Route::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_path_resolves_to_its_route() {
        for (route, path) in ROUTE_TABLE {
            assert_eq!(resolve(path), route);
            assert_eq!(route.path(), Some(path));
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/unknown-page"), Route::NotFound);
        assert_eq!(resolve("/dashboard/"), Route::NotFound);
        assert_eq!(resolve(""), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn ids_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_id(route.id()), Some(route));
        }
        assert_eq!(Route::from_id("admin"), None);
    }

    #[test]
    fn history_state_takes_precedence() {
        assert_eq!(Route::from_history(Some("saved"), "/digest"), Route::Saved);
        assert_eq!(Route::from_history(Some("bogus"), "/digest"), Route::Digest);
        assert_eq!(Route::from_history(None, "/nope"), Route::NotFound);
    }
}
