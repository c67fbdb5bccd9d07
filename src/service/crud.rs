//! Hero CRUD: one scoped session per call, committed on success, rolled back on any early return.

use crate::error::AppError;
use crate::model::{Hero, HeroCreate, HeroUpdate};
use crate::password::PasswordHasher;
use crate::store::Database;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

pub struct HeroService;

impl HeroService {
    /// Hash the password and insert. Returns the stored row with its new id.
    pub async fn create(
        db: &Database,
        hasher: &dyn PasswordHasher,
        input: HeroCreate,
    ) -> Result<Hero, AppError> {
        let new_hero = input.into_new_hero(hasher);
        let mut session = db.session().await?;
        let hero = session.insert(&new_hero).await?;
        session.commit().await?;
        tracing::info!(id = hero.id, "hero created");
        Ok(hero)
    }

    /// Rows in id order. Bounds are checked by the caller (see [`crate::extractors::Pagination`]).
    pub async fn list(db: &Database, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError> {
        let mut session = db.session().await?;
        let heroes = session.list(offset, limit).await?;
        session.commit().await?;
        Ok(heroes)
    }

    pub async fn read(db: &Database, id: i64) -> Result<Option<Hero>, AppError> {
        let mut session = db.session().await?;
        let hero = session.get(id).await?;
        session.commit().await?;
        Ok(hero)
    }

    /// Merge the fields present in `input`; a present password is hashed first.
    pub async fn update(
        db: &Database,
        hasher: &dyn PasswordHasher,
        id: i64,
        input: HeroUpdate,
    ) -> Result<Option<Hero>, AppError> {
        let changes = input.into_changes(hasher);
        let mut session = db.session().await?;
        let hero = session.update(id, changes).await?;
        if hero.is_some() {
            session.commit().await?;
            tracing::info!(id, "hero updated");
        }
        Ok(hero)
    }

    /// Returns whether a hero was removed.
    pub async fn delete(db: &Database, id: i64) -> Result<bool, AppError> {
        let mut session = db.session().await?;
        let deleted = session.delete(id).await?;
        if deleted {
            session.commit().await?;
            tracing::info!(id, "hero deleted");
        }
        Ok(deleted)
    }
}
