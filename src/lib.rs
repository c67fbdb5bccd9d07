//! Hero API: CRUD REST service for a single Hero entity over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod password;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, FieldError};
pub use model::{Hero, HeroCreate, HeroPublic, HeroUpdate, Patch};
pub use password::{PasswordHasher, PlaceholderHasher};
pub use routes::{build_router, common_routes, hero_routes};
pub use service::HeroService;
pub use state::AppState;
pub use store::{Database, HeroSession};
