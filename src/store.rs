//! SQLite persistence for heroes: pool setup, table DDL, and one scoped session per request.

use crate::model::{Hero, HeroChanges, NewHero};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

const HERO_COLUMNS: &str = "id, name, secret_name, age, hashed_password";

const HERO_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS hero (
        id INTEGER NOT NULL PRIMARY KEY,
        name VARCHAR NOT NULL,
        secret_name VARCHAR NOT NULL,
        age INTEGER,
        hashed_password VARCHAR NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_hero_name ON hero (name)",
    "CREATE INDEX IF NOT EXISTS ix_hero_age ON hero (age)",
];

/// Storage handle shared by all requests. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for `url`, creating the database file if missing.
    /// With `echo` off, statement logging is disabled.
    pub async fn connect(url: &str, echo: bool) -> Result<Self, sqlx::Error> {
        let mut options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        if !echo {
            options = options.disable_statement_logging();
        }
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Database { pool })
    }

    /// Private in-memory database. Each `:memory:` connection is its own database, so the pool
    /// holds exactly one connection and never retires it.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        Ok(Database { pool })
    }

    /// Create the hero table and its indexes if absent. Safe to run on every start.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        for ddl in HERO_DDL {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        tracing::debug!("hero table ready");
        Ok(())
    }

    /// Begin a unit of work. Dropping the session without [`HeroSession::commit`] rolls it back.
    pub async fn session(&self) -> Result<HeroSession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(HeroSession { tx })
    }

    /// Whether the hero table exists. Errors mean the database itself is unreachable.
    pub async fn has_schema(&self) -> Result<bool, sqlx::Error> {
        let found = sqlx::query("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'hero'")
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One request's transaction over the hero table.
pub struct HeroSession {
    tx: Transaction<'static, Sqlite>,
}

impl HeroSession {
    /// Insert and return the stored row with its generated id.
    pub async fn insert(&mut self, hero: &NewHero) -> Result<Hero, sqlx::Error> {
        let sql = format!(
            "INSERT INTO hero (name, secret_name, age, hashed_password) VALUES (?, ?, ?, ?) RETURNING {}",
            HERO_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %hero.name, "query");
        sqlx::query_as::<_, Hero>(&sql)
            .bind(&hero.name)
            .bind(&hero.secret_name)
            .bind(hero.age)
            .bind(&hero.hashed_password)
            .fetch_one(&mut *self.tx)
            .await
    }

    /// Rows in id order, skipping `offset`, at most `limit`.
    pub async fn list(&mut self, offset: i64, limit: i64) -> Result<Vec<Hero>, sqlx::Error> {
        let sql = format!("SELECT {} FROM hero ORDER BY id LIMIT ? OFFSET ?", HERO_COLUMNS);
        tracing::debug!(sql = %sql, offset, limit, "query");
        sqlx::query_as::<_, Hero>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *self.tx)
            .await
    }

    pub async fn get(&mut self, id: i64) -> Result<Option<Hero>, sqlx::Error> {
        let sql = format!("SELECT {} FROM hero WHERE id = ?", HERO_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Hero>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
    }

    /// Merge the present fields in one statement, so the write lock is taken up front rather
    /// than upgraded from a read. `None` when the row does not exist.
    pub async fn update(&mut self, id: i64, changes: HeroChanges) -> Result<Option<Hero>, sqlx::Error> {
        let sql = format!(
            "UPDATE hero SET \
             name = CASE WHEN ? THEN ? ELSE name END, \
             secret_name = CASE WHEN ? THEN ? ELSE secret_name END, \
             age = CASE WHEN ? THEN ? ELSE age END, \
             hashed_password = CASE WHEN ? THEN ? ELSE hashed_password END \
             WHERE id = ? RETURNING {}",
            HERO_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let (set_name, name) = changes.name.into_required();
        let (set_secret_name, secret_name) = changes.secret_name.into_required();
        let (set_age, age) = changes.age.into_nullable();
        let (set_password, hashed_password) = changes.hashed_password.into_required();
        sqlx::query_as::<_, Hero>(&sql)
            .bind(set_name)
            .bind(name)
            .bind(set_secret_name)
            .bind(secret_name)
            .bind(set_age)
            .bind(age)
            .bind(set_password)
            .bind(hashed_password)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        let sql = "DELETE FROM hero WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&mut *self.tx).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Patch;

    fn new_hero(name: &str) -> NewHero {
        NewHero {
            name: name.into(),
            secret_name: format!("{} secret", name),
            age: None,
            hashed_password: "hashed".into(),
        }
    }

    async fn database() -> Database {
        let db = Database::in_memory().await.unwrap();
        db.ensure_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let db = database().await;
        db.ensure_schema().await.unwrap();
        assert!(db.has_schema().await.unwrap());
    }

    #[tokio::test]
    async fn fresh_database_has_no_schema() {
        let db = Database::in_memory().await.unwrap();
        assert!(!db.has_schema().await.unwrap());
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let db = database().await;
        let mut session = db.session().await.unwrap();
        let first = session.insert(&new_hero("Deadpond")).await.unwrap();
        let second = session.insert(&new_hero("Rusty-Man")).await.unwrap();
        session.commit().await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.hashed_password, "hashed");
    }

    #[tokio::test]
    async fn list_respects_offset_and_limit() {
        let db = database().await;
        let mut session = db.session().await.unwrap();
        for name in ["a", "b", "c", "d"] {
            session.insert(&new_hero(name)).await.unwrap();
        }
        let page = session.list(1, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
        assert!(session.list(10, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dropped_session_rolls_back() {
        let db = database().await;
        {
            let mut session = db.session().await.unwrap();
            session.insert(&new_hero("Ghost")).await.unwrap();
        }
        let mut session = db.session().await.unwrap();
        assert!(session.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_missing_rows() {
        let db = database().await;
        let mut session = db.session().await.unwrap();
        let changes = HeroChanges {
            name: Patch::Value("x".into()),
            ..Default::default()
        };
        assert!(session.update(42, changes).await.unwrap().is_none());
        assert!(!session.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_clears_age_on_null() {
        let db = database().await;
        let mut session = db.session().await.unwrap();
        let mut hero = new_hero("Rusty-Man");
        hero.age = Some(48);
        let stored = session.insert(&hero).await.unwrap();
        let changes = HeroChanges {
            age: Patch::Null,
            ..Default::default()
        };
        let updated = session.update(stored.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.age, None);
        assert_eq!(session.get(stored.id).await.unwrap().unwrap().age, None);
    }

    #[tokio::test]
    async fn update_overwrites_only_present_fields() {
        let db = database().await;
        let mut session = db.session().await.unwrap();
        let mut hero = new_hero("Deadpond");
        hero.age = Some(30);
        let stored = session.insert(&hero).await.unwrap();
        let changes = HeroChanges {
            name: Patch::Value("Deadpuddle".into()),
            secret_name: Patch::Absent,
            age: Patch::Absent,
            hashed_password: Patch::Null,
        };
        let updated = session.update(stored.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, "Deadpuddle");
        assert_eq!(updated.secret_name, stored.secret_name);
        assert_eq!(updated.age, Some(30));
        assert_eq!(updated.hashed_password, "hashed");
    }
}
