//! HeroService: CRUD over scoped store sessions, plus request validation.

mod crud;
mod validation;
pub use crud::{HeroService, DEFAULT_LIMIT, MAX_LIMIT};
pub use validation::{parse_int, FieldKind, FieldRule, RequestValidator};
