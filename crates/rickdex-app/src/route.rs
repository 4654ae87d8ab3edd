//! Routes and navigation history
//!
//! Two routes exist: the character list at `/` and a character profile at
//! `/profile/{id}`. Going back pops the history rather than jumping to a
//! fixed route.

use rickdex_core::prelude::*;

/// A navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/profile/{id}`
    Profile { id: u32 },
}

impl Route {
    /// Parse a path such as `/` or `/profile/2`
    pub fn parse(path: &str) -> Result<Route> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::List),
            ["profile", id] => id
                .parse::<u32>()
                .map(|id| Route::Profile { id })
                .map_err(|_| Error::invalid_route(trimmed)),
            _ => Err(Error::invalid_route(trimmed)),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Profile { id } => format!("/profile/{}", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation history; the last entry is the active route
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        // history is never empty: `back` refuses to pop the last entry
        self.history.last().copied().unwrap_or_default()
    }

    pub fn push(&mut self, route: Route) {
        self.history.push(route);
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Pop the active route and return the one now active.
    ///
    /// `None` (and no change) when there is nothing to go back to.
    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.history.pop();
        Some(self.current())
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(Route::parse("/").unwrap(), Route::List);
        assert_eq!(Route::parse("").unwrap(), Route::List);
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!(
            Route::parse("/profile/2").unwrap(),
            Route::Profile { id: 2 }
        );
        assert_eq!(
            Route::parse("profile/42/").unwrap(),
            Route::Profile { id: 42 }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!(Route::parse("/profile").is_err());
        assert!(Route::parse("/profile/rick").is_err());
        assert!(Route::parse("/profile/-1").is_err());
        assert!(Route::parse("/episodes/1").is_err());
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [Route::List, Route::Profile { id: 183 }] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_navigator_back_returns_previous() {
        let mut nav = Navigator::new(Route::List);
        nav.push(Route::Profile { id: 1 });
        assert_eq!(nav.current(), Route::Profile { id: 1 });

        assert_eq!(nav.back(), Some(Route::List));
        assert_eq!(nav.current(), Route::List);
    }

    #[test]
    fn test_navigator_back_without_history_is_noop() {
        let mut nav = Navigator::new(Route::Profile { id: 5 });
        assert!(!nav.can_go_back());
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Profile { id: 5 });
        assert_eq!(nav.depth(), 1);
    }
}
