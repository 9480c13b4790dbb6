use super::tags::Frequency;
use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Subscription {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub price: Decimal,
    pub frequency: Frequency,
    pub payment_date: DateTime<Utc>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewSubscription {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub frequency: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewSubscription {
    pub fn new(
        user_id: i32,
        name: &str,
        price: Decimal,
        frequency: &str,
        payment_date: DateTime<Utc>,
    ) -> NewSubscription {
        NewSubscription {
            user_id: Some(user_id),
            name: Some(name.to_owned()),
            price: Some(price),
            frequency: Some(frequency.to_owned()),
            payment_date: Some(payment_date),
            ..NewSubscription::default()
        }
    }
}

impl Entity for Subscription {
    type New = NewSubscription;

    const KIND: EntityKind = EntityKind::Subscription;

    fn build(
        new: NewSubscription,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Subscription, ValidationError> {
        let subscription = Subscription {
            id,
            user_id: required("user_id", new.user_id)?,
            name: required("name", new.name)?,
            price: required("price", new.price)?,
            frequency: Frequency::from_tag("frequency", &required("frequency", new.frequency)?)?,
            payment_date: required("payment_date", new.payment_date)?,
            last_payment_date: new.last_payment_date,
            is_active: new.is_active.unwrap_or(true),
            created_at: new.created_at.unwrap_or(now),
        };
        subscription.validate()?;
        Ok(subscription)
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
        Some(ForeignKey::Subscription(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("name", &self.name, 100)?;
        validation::money("price", &self.price)
    }
}
