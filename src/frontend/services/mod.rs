//! Frontend services: navigation guard and session state.

pub mod guard;
pub mod session;
