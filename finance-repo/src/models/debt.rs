use super::tags::{tag_or, Status};
use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money the user owes to a creditor.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Debt {
    pub id: i32,
    pub user_id: i32,
    pub creditor: String,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewDebt {
    pub user_id: Option<i32>,
    pub creditor: Option<String>,
    pub total_amount: Option<Decimal>,
    pub remaining_amount: Option<Decimal>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewDebt {
    pub fn new(
        user_id: i32,
        creditor: &str,
        total_amount: Decimal,
        remaining_amount: Decimal,
    ) -> NewDebt {
        NewDebt {
            user_id: Some(user_id),
            creditor: Some(creditor.to_owned()),
            total_amount: Some(total_amount),
            remaining_amount: Some(remaining_amount),
            ..NewDebt::default()
        }
    }
}

impl Entity for Debt {
    type New = NewDebt;

    const KIND: EntityKind = EntityKind::Debt;

    fn build(new: NewDebt, id: i32, now: DateTime<Utc>) -> Result<Debt, ValidationError> {
        let debt = Debt {
            id,
            user_id: required("user_id", new.user_id)?,
            creditor: required("creditor", new.creditor)?,
            total_amount: required("total_amount", new.total_amount)?,
            remaining_amount: required("remaining_amount", new.remaining_amount)?,
            last_payment_date: new.last_payment_date,
            payment_date: new.payment_date,
            status: tag_or(new.status, Status::default(), |tag| {
                Status::from_tag("status", tag)
            })?,
            created_at: new.created_at.unwrap_or(now),
        };
        debt.validate()?;
        Ok(debt)
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
        Some(ForeignKey::Debt(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("creditor", &self.creditor, 100)?;
        validation::money("total_amount", &self.total_amount)?;
        validation::money("remaining_amount", &self.remaining_amount)
    }
}
