use super::tags::{tag_or, Status};
use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money the user lent to a debtor.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LoanGiven {
    pub id: i32,
    pub user_id: i32,
    pub debtor: String,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewLoanGiven {
    pub user_id: Option<i32>,
    pub debtor: Option<String>,
    pub total_amount: Option<Decimal>,
    pub remaining_amount: Option<Decimal>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewLoanGiven {
    pub fn new(
        user_id: i32,
        debtor: &str,
        total_amount: Decimal,
        remaining_amount: Decimal,
    ) -> NewLoanGiven {
        NewLoanGiven {
            user_id: Some(user_id),
            debtor: Some(debtor.to_owned()),
            total_amount: Some(total_amount),
            remaining_amount: Some(remaining_amount),
            ..NewLoanGiven::default()
        }
    }
}

impl Entity for LoanGiven {
    type New = NewLoanGiven;

    const KIND: EntityKind = EntityKind::LoanGiven;

    fn build(new: NewLoanGiven, id: i32, now: DateTime<Utc>) -> Result<LoanGiven, ValidationError> {
        let loan = LoanGiven {
            id,
            user_id: required("user_id", new.user_id)?,
            debtor: required("debtor", new.debtor)?,
            total_amount: required("total_amount", new.total_amount)?,
            remaining_amount: required("remaining_amount", new.remaining_amount)?,
            last_payment_date: new.last_payment_date,
            payment_date: new.payment_date,
            status: tag_or(new.status, Status::default(), |tag| {
                Status::from_tag("status", tag)
            })?,
            created_at: new.created_at.unwrap_or(now),
        };
        loan.validate()?;
        Ok(loan)
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
        Some(ForeignKey::LoanGiven(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("debtor", &self.debtor, 100)?;
        validation::money("total_amount", &self.total_amount)?;
        validation::money("remaining_amount", &self.remaining_amount)
    }
}
