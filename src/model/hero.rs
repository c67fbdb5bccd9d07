//! Hero row and its request/response views.
//!
//! Every view is the base field set (`name`, `secret_name`, `age`) composed with its own extra
//! fields. The field lists drive request validation; the structs are what handlers work with.

use crate::model::Patch;
use crate::password::PasswordHasher;
use crate::service::FieldRule;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields shared by every view.
pub const BASE_FIELDS: &[FieldRule] = &[
    FieldRule::string("name"),
    FieldRule::string("secret_name"),
    FieldRule::nullable_int("age"),
];

const PASSWORD_FIELD: FieldRule = FieldRule::string("password");

/// Stored row. `hashed_password` never leaves the service; convert to [`HeroPublic`] for output.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub hashed_password: String,
}

/// Row to insert; the store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub hashed_password: String,
}

/// Creation input: base fields plus a plaintext password.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HeroCreate {
    #[schema(example = "Deadpond")]
    pub name: String,
    #[schema(example = "Dive Wilson")]
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<i64>,
    pub password: String,
}

impl HeroCreate {
    pub fn fields() -> Vec<FieldRule> {
        BASE_FIELDS.iter().copied().chain([PASSWORD_FIELD]).collect()
    }

    pub fn into_new_hero(self, hasher: &dyn PasswordHasher) -> NewHero {
        NewHero {
            hashed_password: hasher.hash(&self.password),
            name: self.name,
            secret_name: self.secret_name,
            age: self.age,
        }
    }
}

/// Public output: base fields plus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroPublic {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
}

impl From<Hero> for HeroPublic {
    fn from(hero: Hero) -> Self {
        HeroPublic {
            id: hero.id,
            name: hero.name,
            secret_name: hero.secret_name,
            age: hero.age,
        }
    }
}

/// Update input: every creation field, each optional. Keys missing from the payload stay `Absent`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct HeroUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub secret_name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub age: Patch<i64>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub password: Patch<String>,
}

impl HeroUpdate {
    pub fn fields() -> Vec<FieldRule> {
        HeroCreate::fields().into_iter().map(FieldRule::optional).collect()
    }

    /// Hash a present password; the plaintext is dropped here.
    pub fn into_changes(self, hasher: &dyn PasswordHasher) -> HeroChanges {
        HeroChanges {
            name: self.name,
            secret_name: self.secret_name,
            age: self.age,
            hashed_password: self.password.map(|p| hasher.hash(&p)),
        }
    }
}

/// Validated partial update in storage terms.
#[derive(Debug, Clone, Default)]
pub struct HeroChanges {
    pub name: Patch<String>,
    pub secret_name: Patch<String>,
    pub age: Patch<i64>,
    pub hashed_password: Patch<String>,
}
