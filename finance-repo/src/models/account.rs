use super::tags::AccountType;
use super::{Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Account {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub balance: Decimal,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewAccount {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub balance: Option<Decimal>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewAccount {
    pub fn new(user_id: i32, name: &str, account_type: &str) -> NewAccount {
        NewAccount {
            user_id: Some(user_id),
            name: Some(name.to_owned()),
            account_type: Some(account_type.to_owned()),
            ..NewAccount::default()
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> NewAccount {
        self.balance = Some(balance);
        self
    }
}

impl Entity for Account {
    type New = NewAccount;

    const KIND: EntityKind = EntityKind::Account;

    fn build(new: NewAccount, id: i32, now: DateTime<Utc>) -> Result<Account, ValidationError> {
        let account = Account {
            id,
            user_id: required("user_id", new.user_id)?,
            name: required("name", new.name)?,
            balance: new.balance.unwrap_or(Decimal::ZERO),
            account_type: AccountType::from_tag("type", &required("type", new.account_type)?)?,
            created_at: new.created_at.unwrap_or(now),
        };
        account.validate()?;
        Ok(account)
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
        Some(ForeignKey::Account(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("name", &self.name, 100)?;
        validation::money("balance", &self.balance)
    }
}
