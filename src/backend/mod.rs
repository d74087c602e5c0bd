//! Backend: storage, pricing and app configuration.

pub mod pricing;
pub mod storage;
pub mod utils;
