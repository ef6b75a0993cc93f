use serde::{Deserialize, Serialize};

/// A page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/`: stock list plus crypto list.
    Home,
    /// `/assets`
    Assets,
    /// `/contact`
    Contact,
    /// `/crypto/{id}`
    CryptoDetail { id: String },
    /// Anything else; keeps the requested path for display.
    NotFound { path: String },
}

impl Route {
    /// Resolve a path. Query string and fragment are ignored.
    ///
    /// `/` only matches exactly. `/assets`, `/contact` and `/crypto/{id}`
    /// also match deeper paths (`/assets/x` is still the assets page).
    /// The page segment ignores case; the coin id is kept as written.
    pub fn parse(path: &str) -> Self {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();

        let Some((first, rest)) = segments.split_first() else {
            return Route::Home;
        };
        match (first.to_ascii_lowercase().as_str(), rest) {
            ("assets", _) => Route::Assets,
            ("contact", _) => Route::Contact,
            ("crypto", [id, ..]) => Route::CryptoDetail {
                id: (*id).to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Assets => "/assets".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::CryptoDetail { id } => format!("/crypto/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
