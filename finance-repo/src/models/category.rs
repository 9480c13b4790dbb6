use super::tags::CategoryType;
use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Category {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewCategory {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

impl NewCategory {
    pub fn new(user_id: i32, name: &str, category_type: &str) -> NewCategory {
        NewCategory {
            user_id: Some(user_id),
            name: Some(name.to_owned()),
            category_type: Some(category_type.to_owned()),
        }
    }
}

impl Entity for Category {
    type New = NewCategory;

    const KIND: EntityKind = EntityKind::Category;

    fn build(new: NewCategory, id: i32, _now: DateTime<Utc>) -> Result<Category, ValidationError> {
        let category = Category {
            id,
            user_id: required("user_id", new.user_id)?,
            name: required("name", new.name)?,
            category_type: CategoryType::from_tag("type", &required("type", new.category_type)?)?,
        };
        category.validate()?;
        Ok(category)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn user_id(&self) -> Option<i32> {
        Some(self.user_id)
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        vec![ForeignKey::User(self.user_id)]
    }

    fn key_for(id: i32) -> Option<ForeignKey> {
        Some(ForeignKey::Category(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("name", &self.name, 100)
    }
}
