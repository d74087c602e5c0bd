//! Frontend: routes, guard and views.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
