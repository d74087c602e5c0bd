//! Navigation guard.
//!
//! Decides, for every navigation, whether to let it through or send the user
//! to the view matching their session. The guard only reads the session
//! marker; login and logout are the only writers.

use crate::backend::storage::KeyValueStore;
use crate::frontend::app::routes::{self, RouteName, RouteTarget};

/// Storage key suffix of the session marker.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Upper bound on redirects followed while resolving a path.
const MAX_HOPS: usize = 4;

/// Storage key of the session marker under `prefix`.
pub fn session_key(prefix: &str) -> String {
    format!("{prefix}{CURRENT_USER_KEY}")
}

/// A session exists when the marker is present and non-empty.
///
/// The value itself is not inspected.
pub fn is_authenticated(store: &impl KeyValueStore, key: &str) -> bool {
    store.get(key).is_some_and(|marker| !marker.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Proceed,
    RedirectTo(RouteName),
}

/// Guard decision for navigating to `target`. First matching rule wins.
pub fn decide(target: RouteName, is_authenticated: bool) -> Action {
    if target.requires_auth() && !is_authenticated {
        return Action::RedirectTo(RouteName::Login);
    }

    if target == RouteName::Login && is_authenticated {
        return Action::RedirectTo(RouteName::Calculator);
    }

    Action::Proceed
}

/// Outcome of following a path through the route table and the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// View that ends up rendered.
    pub landed: RouteName,
    /// Paths redirected through, in order.
    pub redirects: Vec<&'static str>,
}

/// Resolves `path` the way the router does on a navigation.
///
/// Table redirects apply first, then the guard runs on each view reached
/// until it lets the navigation proceed. Unknown paths go to the root.
pub fn resolve(path: &str, is_authenticated: bool) -> Resolution {
    let mut redirects = Vec::new();
    let mut entry = routes::lookup(path).unwrap_or_else(|| {
        redirects.push(routes::ROOT_PATH);
        routes::root()
    });

    for _ in 0..MAX_HOPS {
        let next = match entry.target {
            RouteTarget::Redirect(next) => next,
            RouteTarget::View(name) => match decide(name, is_authenticated) {
                Action::Proceed => {
                    return Resolution {
                        landed: name,
                        redirects,
                    };
                }
                Action::RedirectTo(next) => next,
            },
        };
        redirects.push(next.path());
        entry = next.entry();
    }

    log::warn!("Redirect limit reached resolving {path}, falling back to login");
    Resolution {
        landed: RouteName::Login,
        redirects,
    }
}
