use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod account;
mod category;
mod debt;
mod installment;
mod loan_given;
mod reminder;
mod subscription;
mod tags;
mod transaction;
mod user;

pub use account::{Account, NewAccount};
pub use category::{Category, NewCategory};
pub use debt::{Debt, NewDebt};
pub use installment::{Installment, InstallmentTransaction, NewInstallment, NewInstallmentTransaction};
pub use loan_given::{LoanGiven, NewLoanGiven};
pub use reminder::{NewReminder, Reminder};
pub use subscription::{NewSubscription, Subscription};
pub use tags::{AccountType, CategoryType, Frequency, ReminderType, Status};
pub use transaction::{NewTransaction, Transaction};
pub use user::{NewUser, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Account,
    Category,
    Transaction,
    Subscription,
    Debt,
    LoanGiven,
    Installment,
    InstallmentTransaction,
    Reminder,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        EntityKind::User,
        EntityKind::Account,
        EntityKind::Category,
        EntityKind::Transaction,
        EntityKind::Subscription,
        EntityKind::Debt,
        EntityKind::LoanGiven,
        EntityKind::Installment,
        EntityKind::InstallmentTransaction,
        EntityKind::Reminder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Account => "account",
            EntityKind::Category => "category",
            EntityKind::Transaction => "transaction",
            EntityKind::Subscription => "subscription",
            EntityKind::Debt => "debt",
            EntityKind::LoanGiven => "loan_given",
            EntityKind::Installment => "installment",
            EntityKind::InstallmentTransaction => "installment_transaction",
            EntityKind::Reminder => "reminder",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown entity kind {s:?}"))
    }
}

/// A reference from one row to another, used both as a relation index key
/// and to check that referenced rows exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForeignKey {
    User(i32),
    Account(i32),
    Category(i32),
    Transaction(i32),
    Subscription(i32),
    Debt(i32),
    LoanGiven(i32),
    Installment(i32),
}

impl ForeignKey {
    pub fn target(&self) -> EntityKind {
        match self {
            ForeignKey::User(_) => EntityKind::User,
            ForeignKey::Account(_) => EntityKind::Account,
            ForeignKey::Category(_) => EntityKind::Category,
            ForeignKey::Transaction(_) => EntityKind::Transaction,
            ForeignKey::Subscription(_) => EntityKind::Subscription,
            ForeignKey::Debt(_) => EntityKind::Debt,
            ForeignKey::LoanGiven(_) => EntityKind::LoanGiven,
            ForeignKey::Installment(_) => EntityKind::Installment,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            ForeignKey::User(id)
            | ForeignKey::Account(id)
            | ForeignKey::Category(id)
            | ForeignKey::Transaction(id)
            | ForeignKey::Subscription(id)
            | ForeignKey::Debt(id)
            | ForeignKey::LoanGiven(id)
            | ForeignKey::Installment(id) => id,
        }
    }
}

impl Display for ForeignKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.target(), self.id())
    }
}

pub trait Entity: Clone + Send + Sync + 'static {
    /// Insert payload for this entity.
    type New: Send;

    const KIND: EntityKind;

    /// Builds a row from its insert payload, applying column defaults and
    /// validating every column constraint.
    fn build(new: Self::New, id: i32, now: DateTime<Utc>) -> Result<Self, ValidationError>;

    fn id(&self) -> i32;

    /// The user this row belongs to, if it carries a `user_id` column.
    fn user_id(&self) -> Option<i32> {
        None
    }

    fn foreign_keys(&self) -> Vec<ForeignKey>;

    /// How other rows refer to a row of this kind.
    fn key_for(_id: i32) -> Option<ForeignKey> {
        None
    }

    fn unique_key(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<(), ValidationError>;
}

fn push_some(keys: &mut Vec<ForeignKey>, id: Option<i32>, key: fn(i32) -> ForeignKey) {
    if let Some(id) = id {
        keys.push(key(id));
    }
}
