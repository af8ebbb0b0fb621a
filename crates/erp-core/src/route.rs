//! Page table and hash-based locations.
//!
//! URL format: `#/path?query` (e.g. `#/users?search=ann&email=corp`).

/// Landing path; shown with no active tab.
pub const DEFAULT_PATH: &str = "/";

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Users,
    Articles,
    Purchases,
    Settings,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Users,
        Page::Articles,
        Page::Purchases,
        Page::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Users => "/users",
            Self::Articles => "/articles",
            Self::Purchases => "/purchases",
            Self::Settings => "/settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Usuarios",
            Self::Articles => "Artículos",
            Self::Purchases => "Compras",
            Self::Settings => "Configuración",
        }
    }

    /// Page mounted at `path`. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == normalized)
    }
}

/// A path plus its query string (without `?`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    pub fn landing() -> Self {
        Self::new(DEFAULT_PATH, "")
    }

    /// Parse a URL hash (`#/users?search=x`, `#/`, or empty).
    pub fn from_hash(hash: &str) -> Self {
        let rest = hash.trim_start_matches('#');
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let path = format!("/{}", path.trim_start_matches('/'));
        Self::new(path, query)
    }

    pub fn to_hash(&self) -> String {
        if self.query.is_empty() {
            format!("#{}", self.path)
        } else {
            format!("#{}?{}", self.path, self.query)
        }
    }

    pub fn page(&self) -> Option<Page> {
        Page::from_path(&self.path)
    }

    pub fn is_landing(&self) -> bool {
        self.page().is_some_and(|p| p.path() == DEFAULT_PATH)
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(self.path.clone(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/users/"), Some(Page::Users));
        assert_eq!(Page::from_path(""), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/unknown"), None);
    }

    #[test]
    fn test_location_parsing() {
        assert_eq!(Location::from_hash(""), Location::landing());
        assert_eq!(Location::from_hash("#"), Location::landing());
        assert_eq!(Location::from_hash("#/"), Location::landing());
        assert_eq!(
            Location::from_hash("#/users?search=ann"),
            Location::new("/users", "search=ann")
        );
        assert_eq!(
            Location::from_hash("#articles"),
            Location::new("/articles", "")
        );
    }

    #[test]
    fn test_location_to_hash() {
        assert_eq!(Location::landing().to_hash(), "#/");
        assert_eq!(
            Location::new("/users", "search=ann").to_hash(),
            "#/users?search=ann"
        );
        assert_eq!(Location::new("/purchases", "").to_hash(), "#/purchases");
    }

    #[test]
    fn test_landing() {
        assert!(Location::landing().is_landing());
        assert!(!Location::new("/users", "").is_landing());
    }
}
