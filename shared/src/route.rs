use crate::constants::{PATH_DASHBOARD, PATH_LANDING};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
}

impl Route {
    /// Unknown paths have no route and render nothing.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => PATH_LANDING,
            trimmed => trimmed,
        };
        if path == PATH_LANDING {
            Some(Route::Landing)
        } else if path == PATH_DASHBOARD {
            Some(Route::Dashboard)
        } else {
            None
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => PATH_LANDING,
            Route::Dashboard => PATH_DASHBOARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", Some(Route::Landing))]
    #[case("", Some(Route::Landing))]
    #[case("/#access_token=abc", Some(Route::Landing))]
    #[case("/dashboard", Some(Route::Dashboard))]
    #[case("/dashboard/", Some(Route::Dashboard))]
    #[case("/dashboard?x=1", Some(Route::Dashboard))]
    #[case("/settings", None)]
    #[case("/dashboard/extra", None)]
    fn maps_paths(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Landing, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
