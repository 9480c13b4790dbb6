use crate::models::{
    Account, Category, Debt, ForeignKey, Installment, InstallmentTransaction, LoanGiven, Reminder,
    Subscription, Transaction, User,
};
use crate::repo::{EntityRepo, FinanceRepo, RepoError};
use crate::validation::ValidationError;
use anyhow::anyhow;
use chrono::Utc;
use state::{State, Stored};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

mod state;
mod table;

pub fn create_repo() -> Arc<dyn FinanceRepo> {
    Arc::new(MemFinanceRepo::new())
}

/// Arena store: one table per entity, relations resolved through per-table
/// foreign-key indexes rather than object references.
pub struct MemFinanceRepo {
    state: RwLock<State>,
}

impl MemFinanceRepo {
    pub fn new() -> MemFinanceRepo {
        MemFinanceRepo {
            state: RwLock::new(State::new()),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemFinanceRepo {
    fn default() -> Self {
        MemFinanceRepo::new()
    }
}

impl<T: Stored> EntityRepo<T> for MemFinanceRepo {
    fn create(&self, new: T::New) -> Result<T, RepoError> {
        let mut write_guard = self.write_lock()?;

        let id = T::table(&write_guard).peek_id();
        let row = T::build(new, id, Utc::now()).map_err(RepoError::invalid::<T>)?;
        write_guard.check_write(&row)?;

        T::table_mut(&mut write_guard).insert(row.clone());
        debug!(kind = %T::KIND, id, "Created row");

        Ok(row)
    }

    fn get(&self, id: i32) -> Result<T, RepoError> {
        EntityRepo::<T>::find(self, id)?.ok_or(RepoError::NotFound(T::KIND, id))
    }

    fn find(&self, id: i32) -> Result<Option<T>, RepoError> {
        let read_guard = self.read_lock()?;
        Ok(T::table(&read_guard).get(id).cloned())
    }

    fn update(&self, id: i32, change: &mut dyn FnMut(&mut T)) -> Result<T, RepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(current) = T::table(&write_guard).get(id).cloned() else {
            return Err(RepoError::NotFound(T::KIND, id));
        };
        let mut row = current.clone();
        change(&mut row);

        if row.id() != id {
            return Err(RepoError::invalid::<T>(ValidationError::Immutable {
                field: "id",
            }));
        }
        row.validate().map_err(RepoError::invalid::<T>)?;

        let owner = write_guard.check_write(&row)?;
        let referenced = T::key_for(id).is_some_and(|key| write_guard.is_referenced(key));
        if referenced && owner != write_guard.owner(&current)? {
            warn!(kind = %T::KIND, id, "Refusing to move referenced row to another user");
            return Err(RepoError::InUse(T::KIND, id));
        }

        T::table_mut(&mut write_guard).replace(row.clone());
        debug!(kind = %T::KIND, id, "Updated row");

        Ok(row)
    }

    fn delete(&self, id: i32) -> Result<T, RepoError> {
        let mut write_guard = self.write_lock()?;

        if T::key_for(id).is_some_and(|key| write_guard.is_referenced(key)) {
            warn!(kind = %T::KIND, id, "Refusing to delete referenced row");
            return Err(RepoError::InUse(T::KIND, id));
        }

        let row = T::table_mut(&mut write_guard)
            .remove(id)
            .ok_or(RepoError::NotFound(T::KIND, id))?;
        debug!(kind = %T::KIND, id, "Deleted row");

        Ok(row)
    }

    fn list_by(&self, key: ForeignKey) -> Result<Vec<T>, RepoError> {
        let read_guard = self.read_lock()?;
        Ok(T::table(&read_guard).children(key))
    }
}

impl FinanceRepo for MemFinanceRepo {
    fn users(&self) -> &dyn EntityRepo<User> {
        self
    }

    fn accounts(&self) -> &dyn EntityRepo<Account> {
        self
    }

    fn categories(&self) -> &dyn EntityRepo<Category> {
        self
    }

    fn transactions(&self) -> &dyn EntityRepo<Transaction> {
        self
    }

    fn subscriptions(&self) -> &dyn EntityRepo<Subscription> {
        self
    }

    fn debts(&self) -> &dyn EntityRepo<Debt> {
        self
    }

    fn loans_given(&self) -> &dyn EntityRepo<LoanGiven> {
        self
    }

    fn installments(&self) -> &dyn EntityRepo<Installment> {
        self
    }

    fn installment_transactions(&self) -> &dyn EntityRepo<InstallmentTransaction> {
        self
    }

    fn reminders(&self) -> &dyn EntityRepo<Reminder> {
        self
    }
}
