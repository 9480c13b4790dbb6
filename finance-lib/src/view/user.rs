use crate::view::{
    shallow_all, AccountView, CategoryView, DebtView, LoanGivenView, ReminderView, Render,
    RenderDeep, SubscriptionView, TransactionView,
};
use chrono::{DateTime, Utc};
use finance_repo::models::{ForeignKey, User};
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

/// Public user row. The password hash is never rendered.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UserView {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserView,
    pub accounts: Vec<AccountView>,
    pub transactions: Vec<TransactionView>,
    pub categories: Vec<CategoryView>,
    pub subscriptions: Vec<SubscriptionView>,
    pub loans_given: Vec<LoanGivenView>,
    pub debts: Vec<DebtView>,
    pub reminders: Vec<ReminderView>,
}

impl Render for User {
    type Shallow = UserView;

    fn shallow(&self) -> UserView {
        UserView {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            currency: self.currency.clone(),
            created_at: self.created_at,
        }
    }
}

impl RenderDeep for User {
    type Deep = UserDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<UserDetail, RepoError> {
        let key = ForeignKey::User(self.id);
        Ok(UserDetail {
            user: self.shallow(),
            accounts: shallow_all(repo.accounts().list_by(key)?),
            transactions: shallow_all(repo.transactions().list_by(key)?),
            categories: shallow_all(repo.categories().list_by(key)?),
            subscriptions: shallow_all(repo.subscriptions().list_by(key)?),
            loans_given: shallow_all(repo.loans_given().list_by(key)?),
            debts: shallow_all(repo.debts().list_by(key)?),
            reminders: shallow_all(repo.reminders().list_by(key)?),
        })
    }
}
