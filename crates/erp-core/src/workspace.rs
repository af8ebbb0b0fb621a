//! Tabbed multi-document workspace.
//!
//! Tabs are unique by page and kept in opening order. Operations that move
//! the active selection return the [`Location`] the browser should show, so
//! the caller keeps the URL in sync.

use log::debug;

use crate::route::{DEFAULT_PATH, Location, Page};

/// An open page, remembering the query string it was last shown with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub page: Page,
    pub query: String,
}

impl Tab {
    fn new(page: Page) -> Self {
        Self {
            page,
            query: String::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.page.path()
    }

    pub fn title(&self) -> &'static str {
        self.page.title()
    }

    pub fn location(&self) -> Location {
        Location::new(self.path(), self.query.clone())
    }
}

/// Ordered set of open tabs plus the active one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workspace {
    tabs: Vec<Tab>,
    active: Option<Page>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<Page> {
        self.active
    }

    /// Path of the active tab, or the landing path when none is active.
    pub fn active_path(&self) -> &'static str {
        self.active.map_or(DEFAULT_PATH, Page::path)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn is_open(&self, page: Page) -> bool {
        self.tabs.iter().any(|t| t.page == page)
    }

    fn tab(&self, page: Page) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.page == page)
    }

    /// Open `page` (appending a tab if needed) and activate it.
    pub fn open(&mut self, page: Page) -> Location {
        if !self.is_open(page) {
            debug!("workspace: opening tab {}", page.path());
            self.tabs.push(Tab::new(page));
        }
        self.active = Some(page);
        self.tab(page).map_or_else(|| Location::new(page.path(), ""), Tab::location)
    }

    /// Open the page mounted at `path`. Unknown paths are ignored.
    pub fn open_path(&mut self, path: &str) -> Option<Location> {
        Page::from_path(path).map(|page| self.open(page))
    }

    /// Activate an already open tab. Returns `None` if `page` is not open.
    pub fn activate(&mut self, page: Page) -> Option<Location> {
        let location = self.tab(page)?.location();
        self.active = Some(page);
        Some(location)
    }

    /// Close the tab for `page`.
    ///
    /// If it was active, the last remaining tab becomes active, or the
    /// landing path if none remain; the new location is returned. Closing
    /// an inactive or unknown tab returns `None`.
    pub fn close(&mut self, page: Page) -> Option<Location> {
        let before = self.tabs.len();
        self.tabs.retain(|t| t.page != page);
        if self.tabs.len() == before || self.active != Some(page) {
            return None;
        }

        debug!("workspace: closed active tab {}", page.path());
        match self.tabs.last() {
            Some(last) => {
                self.active = Some(last.page);
                Some(last.location())
            }
            None => {
                self.active = None;
                Some(Location::landing())
            }
        }
    }

    /// Remember the query string shown for an open tab's path.
    pub fn remember_query(&mut self, location: &Location) {
        let Some(page) = location.page() else {
            return;
        };
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.page == page) {
            tab.query = location.query.clone();
        }
    }

    /// Follow a location the browser moved to on its own (back/forward).
    ///
    /// A known page opens or activates its tab. The landing path only
    /// activates an already open landing tab; otherwise it clears the
    /// active selection. Unknown paths change nothing.
    pub fn sync(&mut self, location: &Location) {
        if location.is_landing() {
            self.active = self.is_open(Page::Dashboard).then_some(Page::Dashboard);
        } else if self.open_path(&location.path).is_none() {
            return;
        }
        self.remember_query(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ws: &Workspace) -> Vec<Page> {
        ws.tabs().iter().map(|t| t.page).collect()
    }

    #[test]
    fn test_empty_workspace_is_at_landing() {
        let ws = Workspace::new();
        assert!(ws.is_empty());
        assert_eq!(ws.active(), None);
        assert_eq!(ws.active_path(), DEFAULT_PATH);
    }

    #[test]
    fn test_open_twice_does_not_duplicate() {
        let mut ws = Workspace::new();
        ws.open(Page::Users);
        ws.open(Page::Articles);
        let location = ws.open(Page::Users);
        assert_eq!(pages(&ws), vec![Page::Users, Page::Articles]);
        assert_eq!(ws.active(), Some(Page::Users));
        assert_eq!(location, Location::new("/users", ""));
    }

    #[test]
    fn test_open_path() {
        let mut ws = Workspace::new();
        assert_eq!(ws.open_path("/nowhere"), None);
        assert!(ws.is_empty());
        assert_eq!(
            ws.open_path("/purchases"),
            Some(Location::new("/purchases", ""))
        );
        assert_eq!(ws.active_path(), "/purchases");
    }

    #[test]
    fn test_close_only_tab_returns_to_landing() {
        let mut ws = Workspace::new();
        ws.open(Page::Users);
        assert_eq!(ws.close(Page::Users), Some(Location::landing()));
        assert!(ws.is_empty());
        assert_eq!(ws.active(), None);
        assert_eq!(ws.active_path(), DEFAULT_PATH);
    }

    #[test]
    fn test_close_active_falls_back_to_last() {
        let mut ws = Workspace::new();
        ws.open(Page::Users);
        ws.open(Page::Articles);
        ws.open(Page::Purchases);
        ws.activate(Page::Articles);
        assert_eq!(ws.close(Page::Articles), Some(Location::new("/purchases", "")));
        assert_eq!(ws.active(), Some(Page::Purchases));
        assert_eq!(pages(&ws), vec![Page::Users, Page::Purchases]);
    }

    #[test]
    fn test_close_inactive_keeps_selection() {
        let mut ws = Workspace::new();
        ws.open(Page::Users);
        ws.open(Page::Articles);
        assert_eq!(ws.close(Page::Users), None);
        assert_eq!(ws.active(), Some(Page::Articles));
        assert_eq!(ws.close(Page::Settings), None);
    }

    #[test]
    fn test_activate_requires_open_tab() {
        let mut ws = Workspace::new();
        assert_eq!(ws.activate(Page::Users), None);
        assert_eq!(ws.active(), None);
    }

    #[test]
    fn test_tabs_remember_their_query() {
        let mut ws = Workspace::new();
        ws.open(Page::Users);
        ws.remember_query(&Location::new("/users", "search=ann"));
        ws.open(Page::Articles);
        assert_eq!(
            ws.activate(Page::Users),
            Some(Location::new("/users", "search=ann"))
        );
        assert_eq!(ws.open(Page::Users), Location::new("/users", "search=ann"));
    }

    #[test]
    fn test_sync_follows_history() {
        let mut ws = Workspace::new();
        ws.sync(&Location::new("/articles", "code=CAM"));
        assert_eq!(ws.active(), Some(Page::Articles));
        assert_eq!(ws.tabs()[0].query, "code=CAM");

        ws.sync(&Location::landing());
        assert_eq!(ws.active(), None);
        assert_eq!(pages(&ws), vec![Page::Articles]);

        ws.sync(&Location::new("/bogus", ""));
        assert_eq!(ws.active(), None);
        assert_eq!(pages(&ws), vec![Page::Articles]);
    }

    #[test]
    fn test_sync_trailing_slash_opens_page() {
        let mut ws = Workspace::new();
        ws.sync(&Location::new("/purchases/", "total=708"));
        assert_eq!(ws.active_path(), "/purchases");
        assert_eq!(ws.tabs()[0].query, "total=708");
    }

    #[test]
    fn test_sync_landing_activates_open_dashboard() {
        let mut ws = Workspace::new();
        ws.open(Page::Dashboard);
        ws.open(Page::Users);
        ws.sync(&Location::landing());
        assert_eq!(ws.active(), Some(Page::Dashboard));
    }
}
