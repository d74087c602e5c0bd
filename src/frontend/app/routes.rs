//! Route table.
//!
//! [`ROUTES`] is the framework-independent table the guard reasons about;
//! [`Route`] is the same table expressed for the Dioxus router.

use crate::frontend::components::guard::Guard;
use crate::frontend::pages::{Calculator, Login, NotFound};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Views reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Calculator,
}

impl RouteName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Calculator => "calculator",
        }
    }

    pub fn path(self) -> &'static str {
        self.entry().path
    }

    pub fn requires_auth(self) -> bool {
        self.entry().requires_auth
    }

    pub fn entry(self) -> &'static RouteEntry {
        match self {
            Self::Login => &ROUTES[1],
            Self::Calculator => &ROUTES[2],
        }
    }

    /// Router value for this view.
    pub fn route(self) -> Route {
        match self {
            Self::Login => Route::Login {},
            Self::Calculator => Route::Calculator {},
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Unconditional redirect, applied before the guard runs.
    Redirect(RouteName),
    View(RouteName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
    pub requires_auth: bool,
}

pub const ROOT_PATH: &str = "/";

pub static ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        path: ROOT_PATH,
        target: RouteTarget::Redirect(RouteName::Login),
        requires_auth: false,
    },
    RouteEntry {
        path: "/login",
        target: RouteTarget::View(RouteName::Login),
        requires_auth: false,
    },
    RouteEntry {
        path: "/calculator",
        target: RouteTarget::View(RouteName::Calculator),
        requires_auth: true,
    },
];

/// Root entry, the fallback for unknown paths.
pub fn root() -> &'static RouteEntry {
    &ROUTES[0]
}

/// Finds the entry for `path`, ignoring query, fragment and a trailing slash.
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => ROOT_PATH,
        trimmed => trimmed,
    };
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    /// Every table route renders inside the guard.
    #[layout(Guard)]
        #[redirect("/", || Route::Login {})]
        /// Login page.
        #[route("/login")]
        Login {},
        /// Price calculator, requires a session.
        #[route("/calculator")]
        Calculator {},
    #[end_layout]
    /// Anything else.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Table name of this route, `None` for paths outside the table.
    pub fn name(&self) -> Option<RouteName> {
        match self {
            Self::Login {} => Some(RouteName::Login),
            Self::Calculator {} => Some(RouteName::Calculator),
            Self::NotFound { .. } => None,
        }
    }
}
