//! Routes between screens and the navigator that moves between them.
//!
//! ```text
//! /                              -> Home
//! /(tabs)/search                 -> Search
//! /(tabs)/search?filter=featured -> SearchFiltered(Featured)
//! /category/:id                  -> Category
//! /product/:id                   -> Product
//! /auth/login                    -> Login
//! /auth/register                 -> Register
//! /auth/forgot-password          -> ForgotPassword
//! /profile/orders                -> Orders
//! /order-success                 -> OrderSuccess
//! ```

use serde::{Deserialize, Serialize};
use shopwave_catalog::{CategoryId, ProductId};
use std::fmt;
use tracing::debug;

/// Home screen section with a "see all" link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSection {
    Featured,
    #[serde(rename = "new")]
    NewArrivals,
}

impl HomeSection {
    /// Value of the search screen's `filter` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeSection::Featured => "featured",
            HomeSection::NewArrivals => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(HomeSection::Featured),
            "new" => Some(HomeSection::NewArrivals),
            _ => None,
        }
    }
}

/// A screen the app can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Search,
    SearchFiltered(HomeSection),
    Category(CategoryId),
    Product(ProductId),
    Login,
    Register,
    ForgotPassword,
    Orders,
    OrderSuccess,
}

impl Route {
    /// Path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/(tabs)/search".to_string(),
            Route::SearchFiltered(section) => {
                format!("/(tabs)/search?filter={}", section.as_str())
            }
            Route::Category(id) => format!("/category/{id}"),
            Route::Product(id) => format!("/product/{id}"),
            Route::Login => "/auth/login".to_string(),
            Route::Register => "/auth/register".to_string(),
            Route::ForgotPassword => "/auth/forgot-password".to_string(),
            Route::Orders => "/profile/orders".to_string(),
            Route::OrderSuccess => "/order-success".to_string(),
        }
    }

    /// Resolve a path back to its route.
    pub fn from_path(path: &str) -> Option<Self> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let route = match path {
            "/" => Route::Home,
            "/(tabs)/search" => match query.and_then(|q| q.strip_prefix("filter=")) {
                Some(filter) => Route::SearchFiltered(HomeSection::parse(filter)?),
                None => Route::Search,
            },
            "/auth/login" => Route::Login,
            "/auth/register" => Route::Register,
            "/auth/forgot-password" => Route::ForgotPassword,
            "/profile/orders" => Route::Orders,
            "/order-success" => Route::OrderSuccess,
            other => {
                if let Some(id) = other.strip_prefix("/category/").filter(|id| !id.is_empty()) {
                    Route::Category(CategoryId::new(id))
                } else if let Some(id) = other.strip_prefix("/product/").filter(|id| !id.is_empty()) {
                    Route::Product(ProductId::new(id))
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Moves the app between screens.
pub trait Navigator {
    /// Open a route on top of the current one.
    fn push(&mut self, route: Route);

    /// Swap the current route, leaving no way back to it.
    fn replace(&mut self, route: Route);

    /// Return to the previous route.
    fn back(&mut self);
}

/// One navigator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Push(Route),
    Replace(Route),
    Back,
}

/// Navigator that keeps a route stack and every call it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingNavigator {
    stack: Vec<Route>,
    events: Vec<NavEvent>,
}

impl RecordingNavigator {
    /// Start on the home screen.
    pub fn new() -> Self {
        Self::starting_at(Route::Home)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            stack: vec![route],
            events: Vec::new(),
        }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack is never emptied: `back` stops at the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&NavEvent> {
        self.events.last()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        debug!(route = %route, "push");
        self.stack.push(route.clone());
        self.events.push(NavEvent::Push(route));
    }

    fn replace(&mut self, route: Route) {
        debug!(route = %route, "replace");
        if let Some(top) = self.stack.last_mut() {
            *top = route.clone();
        }
        self.events.push(NavEvent::Replace(route));
    }

    fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        debug!(route = %self.current(), "back");
        self.events.push(NavEvent::Back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Category(CategoryId::new("3")).path(), "/category/3");
        assert_eq!(Route::Product(ProductId::new("101")).path(), "/product/101");
        assert_eq!(
            Route::SearchFiltered(HomeSection::NewArrivals).path(),
            "/(tabs)/search?filter=new"
        );
        assert_eq!(Route::ForgotPassword.to_string(), "/auth/forgot-password");
    }

    #[test]
    fn test_from_path() {
        let routes = [
            Route::Home,
            Route::Search,
            Route::SearchFiltered(HomeSection::Featured),
            Route::Category(CategoryId::new("5")),
            Route::Product(ProductId::new("x")),
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::Orders,
            Route::OrderSuccess,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/category/"), None);
        assert_eq!(Route::from_path("/(tabs)/search?filter=sale"), None);
        assert_eq!(Route::from_path("/cart"), None);
    }

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::new();
        nav.push(Route::Login);
        nav.push(Route::Register);
        nav.replace(Route::Home);
        assert_eq!(nav.stack(), &[Route::Home, Route::Login, Route::Home]);

        nav.back();
        assert_eq!(nav.current(), &Route::Login);
        assert_eq!(nav.events().len(), 4);
    }

    #[test]
    fn test_back_stops_at_root() {
        let mut nav = RecordingNavigator::new();
        nav.back();
        nav.back();
        assert_eq!(nav.current(), &Route::Home);
        assert_eq!(nav.last_event(), Some(&NavEvent::Back));
    }
}
