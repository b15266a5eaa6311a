//! Shell entities: colour theme and navigation routes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Shortener,
    Statistics,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Shortener, Route::Statistics];

    pub fn path(self) -> &'static str {
        match self {
            Route::Shortener => "/",
            Route::Statistics => "/statistics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Shortener => "URL Shortener",
            Route::Statistics => "Statistics",
        }
    }

    /// Resolves a path to a known route. Anything else is `None`, which keeps
    /// redirect targets restricted to our own pages.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}
