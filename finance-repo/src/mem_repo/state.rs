use super::table::Table;
use crate::models::{
    Account, Category, Debt, Entity, ForeignKey, Installment, InstallmentTransaction, LoanGiven,
    Reminder, Subscription, Transaction, User,
};
use crate::repo::RepoError;

pub struct State {
    users: Table<User>,
    accounts: Table<Account>,
    categories: Table<Category>,
    transactions: Table<Transaction>,
    subscriptions: Table<Subscription>,
    debts: Table<Debt>,
    loans_given: Table<LoanGiven>,
    installments: Table<Installment>,
    installment_transactions: Table<InstallmentTransaction>,
    reminders: Table<Reminder>,
}

/// What a foreign key points at.
enum Target {
    Missing,
    Owned(i32),
    Unowned,
}

impl State {
    pub fn new() -> State {
        State {
            users: Table::new(),
            accounts: Table::new(),
            categories: Table::new(),
            transactions: Table::new(),
            subscriptions: Table::new(),
            debts: Table::new(),
            loans_given: Table::new(),
            installments: Table::new(),
            installment_transactions: Table::new(),
            reminders: Table::new(),
        }
    }

    fn resolve(&self, key: ForeignKey) -> Target {
        let owner = match key {
            ForeignKey::User(id) => self.users.get(id).map(|u| u.id),
            ForeignKey::Account(id) => self.accounts.get(id).map(|a| a.user_id),
            ForeignKey::Category(id) => self.categories.get(id).map(|c| c.user_id),
            ForeignKey::Transaction(id) => self.transactions.get(id).map(|t| t.user_id),
            ForeignKey::Subscription(id) => self.subscriptions.get(id).map(|s| s.user_id),
            ForeignKey::Debt(id) => self.debts.get(id).map(|d| d.user_id),
            ForeignKey::LoanGiven(id) => self.loans_given.get(id).map(|l| l.user_id),
            ForeignKey::Installment(id) => {
                let Some(installment) = self.installments.get(id) else {
                    return Target::Missing;
                };
                // an installment is owned through whichever parent it has
                return installment
                    .foreign_keys()
                    .into_iter()
                    .map(|parent| self.resolve(parent))
                    .find(|target| matches!(target, Target::Owned(_)))
                    .unwrap_or(Target::Unowned);
            }
        };
        match owner {
            Some(owner) => Target::Owned(owner),
            None => Target::Missing,
        }
    }

    /// Checks that every foreign key of `row` resolves and that all of them
    /// agree on the owning user. Returns that user.
    pub fn owner<T: Entity>(&self, row: &T) -> Result<Option<i32>, RepoError> {
        let mut expected = row.user_id();
        for key in row.foreign_keys() {
            match self.resolve(key) {
                Target::Missing => {
                    return Err(RepoError::MissingReference {
                        kind: T::KIND,
                        id: row.id(),
                        key,
                    })
                }
                Target::Unowned => {}
                Target::Owned(found) => match expected {
                    None => expected = Some(found),
                    Some(expected) if expected != found => {
                        return Err(RepoError::OwnerMismatch {
                            kind: T::KIND,
                            id: row.id(),
                            key,
                            expected,
                            found,
                        })
                    }
                    Some(_) => {}
                },
            }
        }
        Ok(expected)
    }

    /// Reference, ownership and uniqueness checks for a row about to be written.
    pub fn check_write<T: Stored>(&self, row: &T) -> Result<Option<i32>, RepoError> {
        let owner = self.owner(row)?;
        if let Some(other) = T::table(self).unique_conflict(row) {
            return Err(RepoError::Duplicate {
                kind: T::KIND,
                key: other.unique_key().unwrap_or_default().to_owned(),
            });
        }
        Ok(owner)
    }

    pub fn is_referenced(&self, key: ForeignKey) -> bool {
        self.accounts.is_referenced(key)
            || self.categories.is_referenced(key)
            || self.transactions.is_referenced(key)
            || self.subscriptions.is_referenced(key)
            || self.debts.is_referenced(key)
            || self.loans_given.is_referenced(key)
            || self.installments.is_referenced(key)
            || self.installment_transactions.is_referenced(key)
            || self.reminders.is_referenced(key)
    }
}

/// An entity with a table in `State`.
pub trait Stored: Entity {
    fn table(state: &State) -> &Table<Self>;
    fn table_mut(state: &mut State) -> &mut Table<Self>;
}

macro_rules! stored {
    ($($entity:ty => $field:ident),+ $(,)?) => {
        $(
            impl Stored for $entity {
                fn table(state: &State) -> &Table<Self> {
                    &state.$field
                }

                fn table_mut(state: &mut State) -> &mut Table<Self> {
                    &mut state.$field
                }
            }
        )+
    };
}

stored!(
    User => users,
    Account => accounts,
    Category => categories,
    Transaction => transactions,
    Subscription => subscriptions,
    Debt => debts,
    LoanGiven => loans_given,
    Installment => installments,
    InstallmentTransaction => installment_transactions,
    Reminder => reminders,
);
