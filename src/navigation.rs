//! Navigation Shell
//!
//! Client-side route table, active-link matching, and the header's scroll
//! and mobile-menu state.

use serde::{Deserialize, Serialize};

/// Vertical offset past which the header gets its shadow
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
    Admin,
    NotFound,
}

impl Route {
    /// Resolve a path; anything unknown falls through to `NotFound`
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Route::Home,
            "/about" => Route::About,
            "/projects" => Route::Projects,
            "/contact" => Route::Contact,
            "/admin" => Route::Admin,
            _ => Route::NotFound,
        }
    }

    /// Canonical path, `None` for the wildcard fallback
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::About => Some("/about"),
            Route::Projects => Some("/projects"),
            Route::Contact => Some("/contact"),
            Route::Admin => Some("/admin"),
            Route::NotFound => None,
        }
    }
}

/// A header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    pub fn href(&self) -> &'static str {
        self.route.path().unwrap_or("/")
    }

    /// Exact string match against the current path
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href() == current_path
    }
}

/// Links shown in the header and the mobile menu
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", route: Route::Home },
    NavLink { label: "About", route: Route::About },
    NavLink { label: "Projects", route: Route::Projects },
    NavLink { label: "Contact", route: Route::Contact },
];

/// Header UI state; resets on remount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    mobile_menu_open: bool,
    scrolled: bool,
    scroll_threshold: f64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl NavigationState {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            mobile_menu_open: false,
            scrolled: false,
            scroll_threshold,
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute `scrolled`; returns true when it changed
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.scroll_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Link activation inside the mobile menu closes it
    pub fn on_link_activated(&mut self) {
        self.close_menu();
    }

    pub fn on_route_change(&mut self) {
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/projects"), Route::Projects);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path("/about/team"), Route::NotFound);
        assert_eq!(Route::from_path("/Projects"), Route::NotFound);
        assert_eq!(Route::Admin.path(), Some("/admin"));
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_active_link_exact_match() {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|l| l.is_active("/projects"))
            .map(|l| l.label)
            .collect();
        assert_eq!(active, vec!["Projects"]);

        // No prefix matching, and admin has no header link
        assert!(NAV_LINKS.iter().all(|l| !l.is_active("/projects/1")));
        assert!(NAV_LINKS.iter().all(|l| !l.is_active("/admin")));
    }

    #[test]
    fn test_links_resolve_to_their_routes() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href()).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/projects", "/contact"]);
        assert!(NAV_LINKS
            .iter()
            .all(|l| Route::from_path(l.href()) == l.route));
    }

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavigationState::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_mobile_menu_independent_of_scroll() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        nav.on_scroll(120.0);
        assert!(nav.mobile_menu_open());
        assert!(nav.scrolled());

        nav.on_link_activated();
        assert!(!nav.mobile_menu_open());
        assert!(nav.scrolled());

        nav.toggle_menu();
        nav.on_route_change();
        assert!(!nav.mobile_menu_open());
    }
}
