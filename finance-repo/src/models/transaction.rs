use super::{push_some, Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A movement of money on an account. The optional links are independent of
/// each other: a transaction may carry a category and a subscription at once.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i32,
    pub account_id: i32,
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub subscription_id: Option<i32>,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub is_recurring: bool,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewTransaction {
    pub account_id: Option<i32>,
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub subscription_id: Option<i32>,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_recurring: Option<bool>,
}

impl NewTransaction {
    pub fn new(account_id: i32, user_id: i32, amount: Decimal) -> NewTransaction {
        NewTransaction {
            account_id: Some(account_id),
            user_id: Some(user_id),
            amount: Some(amount),
            ..NewTransaction::default()
        }
    }
}

impl Entity for Transaction {
    type New = NewTransaction;

    const KIND: EntityKind = EntityKind::Transaction;

    fn build(
        new: NewTransaction,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Transaction, ValidationError> {
        let transaction = Transaction {
            id,
            account_id: required("account_id", new.account_id)?,
            user_id: required("user_id", new.user_id)?,
            category_id: new.category_id,
            subscription_id: new.subscription_id,
            debt_id: new.debt_id,
            loan_given_id: new.loan_given_id,
            amount: required("amount", new.amount)?,
            description: new.description,
            date: new.date.unwrap_or(now),
            is_recurring: new.is_recurring.unwrap_or(false),
        };
        transaction.validate()?;
        Ok(transaction)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn user_id(&self) -> Option<i32> {
        Some(self.user_id)
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        let mut keys = vec![
            ForeignKey::User(self.user_id),
            ForeignKey::Account(self.account_id),
        ];
        push_some(&mut keys, self.category_id, ForeignKey::Category);
        push_some(&mut keys, self.subscription_id, ForeignKey::Subscription);
        push_some(&mut keys, self.debt_id, ForeignKey::Debt);
        push_some(&mut keys, self.loan_given_id, ForeignKey::LoanGiven);
        keys
    }

    fn key_for(id: i32) -> Option<ForeignKey> {
        Some(ForeignKey::Transaction(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::money("amount", &self.amount)?;
        validation::opt_max_len("description", self.description.as_deref(), 255)
    }
}
