use crate::models::{
    Account, Category, Debt, Entity, EntityKind, ForeignKey, Installment,
    InstallmentTransaction, LoanGiven, Reminder, Subscription, Transaction, User,
};
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("{0} with id {1} not found")]
    NotFound(EntityKind, i32),
    #[error("{kind} {key:?} already exists")]
    Duplicate { kind: EntityKind, key: String },
    #[error("{kind} {id} references missing {key}")]
    MissingReference {
        kind: EntityKind,
        id: i32,
        key: ForeignKey,
    },
    #[error("{kind} {id} belongs to user {expected} but {key} belongs to user {found}")]
    OwnerMismatch {
        kind: EntityKind,
        id: i32,
        key: ForeignKey,
        expected: i32,
        found: i32,
    },
    #[error("{0} with id {1} is still referenced")]
    InUse(EntityKind, i32),
    #[error("invalid {kind}: {source}")]
    Invalid {
        kind: EntityKind,
        source: ValidationError,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepoError {
    pub fn invalid<T: Entity>(source: ValidationError) -> RepoError {
        RepoError::Invalid {
            kind: T::KIND,
            source,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            RepoError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load and store access for one entity table.
pub trait EntityRepo<T: Entity>: Sync + Send {
    fn create(&self, new: T::New) -> Result<T, RepoError>;

    fn get(&self, id: i32) -> Result<T, RepoError>;

    fn find(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// Applies `change` to a copy of the stored row and writes it back once the
    /// result passes validation and reference checks.
    fn update(&self, id: i32, change: &mut dyn FnMut(&mut T)) -> Result<T, RepoError>;

    fn delete(&self, id: i32) -> Result<T, RepoError>;

    /// Rows holding `key`, in id order.
    fn list_by(&self, key: ForeignKey) -> Result<Vec<T>, RepoError>;
}

pub trait FinanceRepo: Sync + Send {
    fn users(&self) -> &dyn EntityRepo<User>;
    fn accounts(&self) -> &dyn EntityRepo<Account>;
    fn categories(&self) -> &dyn EntityRepo<Category>;
    fn transactions(&self) -> &dyn EntityRepo<Transaction>;
    fn subscriptions(&self) -> &dyn EntityRepo<Subscription>;
    fn debts(&self) -> &dyn EntityRepo<Debt>;
    fn loans_given(&self) -> &dyn EntityRepo<LoanGiven>;
    fn installments(&self) -> &dyn EntityRepo<Installment>;
    fn installment_transactions(&self) -> &dyn EntityRepo<InstallmentTransaction>;
    fn reminders(&self) -> &dyn EntityRepo<Reminder>;
}
