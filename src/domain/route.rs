// src/domain/route.rs
use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

/// One of the four screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Settings,
    Create,
    Edit(usize),
}

impl FromStr for Route {
    type Err = DomainError;

    /// Parse the route grammar `/`, `/settings`, `/form`, `/edit/<n>`.
    ///
    /// Settings and form match by prefix. For edit routes only the last path
    /// segment is read as the index. Whether the index points at a note is not
    /// checked here.
    fn from_str(route: &str) -> Result<Self, Self::Err> {
        if route == "/" {
            return Ok(Route::Home);
        }
        if route.starts_with("/settings") {
            return Ok(Route::Settings);
        }
        if route.starts_with("/form") {
            return Ok(Route::Create);
        }
        if route.starts_with("/edit") {
            return route
                .rsplit('/')
                .next()
                .and_then(|segment| segment.parse::<usize>().ok())
                .map(Route::Edit)
                .ok_or_else(|| DomainError::InvalidRoute(route.to_string()));
        }
        Err(DomainError::InvalidRoute(route.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Settings => f.write_str("/settings"),
            Route::Create => f.write_str("/form"),
            Route::Edit(index) => write!(f, "/edit/{index}"),
        }
    }
}
