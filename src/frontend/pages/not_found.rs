//! Fallback view for paths outside the route table.

use crate::frontend::app::RouteName;
use crate::frontend::services::guard::resolve;
use crate::frontend::services::session::SessionState;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// View an unknown path ends up on once it has gone through the root.
pub fn landing_for(segments: &[String], is_authenticated: bool) -> RouteName {
    let path = format!("/{}", segments.join("/"));
    let resolution = resolve(&path, is_authenticated);
    log::debug!("No route for {path}, redirected via {:?}", resolution.redirects);
    resolution.landed
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    nav.replace(landing_for(&segments, session.is_authenticated()).route());
    rsx! { div {} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::app::Route;

    fn segments_of(path: &str) -> Vec<String> {
        match path.parse::<Route>().ok() {
            Some(Route::NotFound { segments }) => segments,
            other => panic!("{path} parsed as {other:?}"),
        }
    }

    #[test]
    fn unknown_path_lands_by_session() {
        let segments = segments_of("/admin/users");
        assert_eq!(segments, vec!["admin".to_string(), "users".to_string()]);
        assert_eq!(landing_for(&segments, false), RouteName::Login);
        assert_eq!(landing_for(&segments, true), RouteName::Calculator);
    }
}
