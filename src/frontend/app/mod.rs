//! Application routing.

pub mod routes;

pub use routes::{Route, RouteEntry, RouteName, RouteTarget};
