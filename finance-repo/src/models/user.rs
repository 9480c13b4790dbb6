use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewUser {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub currency: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewUser {
    pub fn new(full_name: &str, email: &str, password_hash: &str) -> NewUser {
        NewUser {
            full_name: Some(full_name.to_owned()),
            email: Some(email.to_owned()),
            password_hash: Some(password_hash.to_owned()),
            ..NewUser::default()
        }
    }
}

impl Entity for User {
    type New = NewUser;

    const KIND: EntityKind = EntityKind::User;

    fn build(new: NewUser, id: i32, now: DateTime<Utc>) -> Result<User, ValidationError> {
        let user = User {
            id,
            full_name: required("full_name", new.full_name)?,
            email: required("email", new.email)?,
            password_hash: required("password_hash", new.password_hash)?,
            currency: new
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
            created_at: new.created_at.unwrap_or(now),
        };
        user.validate()?;
        Ok(user)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn user_id(&self) -> Option<i32> {
        Some(self.id)
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn key_for(id: i32) -> Option<ForeignKey> {
        Some(ForeignKey::User(id))
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("full_name", &self.full_name, 50)?;
        validation::max_len("email", &self.email, 120)?;
        validation::max_len("currency", &self.currency, 3)
    }
}
