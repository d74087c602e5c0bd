//! Shared components.

pub mod guard;
