//! Router hook applying the navigation guard.

use crate::frontend::app::Route;
use crate::frontend::services::guard::{Action, decide};
use crate::frontend::services::session::SessionState;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

/// Layout wrapping every table route.
///
/// Runs on each navigation and again whenever the session changes, so a
/// login or logout moves the user to the right view without the pages
/// navigating themselves.
#[component]
pub fn Guard() -> Element {
    let route = use_route::<Route>();
    let session = use_context::<SessionState>();
    let nav = navigator();

    let Some(target) = route.name() else {
        return rsx! { Outlet::<Route> {} };
    };

    match decide(target, session.is_authenticated()) {
        Action::Proceed => rsx! {
            main {
                class: format!("page page-{}", target.as_str()),
                Outlet::<Route> {}
            }
        },
        Action::RedirectTo(next) => {
            log::debug!("Guard: {} -> {}", target.path(), next.path());
            nav.replace(next.route());
            rsx! { div {} }
        }
    }
}
