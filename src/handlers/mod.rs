//! HTTP handlers for hero CRUD.

pub mod hero;
pub use hero::*;
