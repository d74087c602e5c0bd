//! Views rendered by the router.

mod calculator;
mod login;
mod not_found;

pub use calculator::Calculator;
pub use login::Login;
pub use not_found::NotFound;
