use crate::view::{
    money, AccountView, CategoryView, DebtBrief, LoanGivenBrief, Render, RenderDeep,
    SubscriptionView,
};
use chrono::{DateTime, Utc};
use finance_repo::models::Transaction;
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

/// Flat transaction row. The debt and loan links are only shown through the
/// deep form's summaries.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransactionView {
    pub id: i32,
    pub account_id: i32,
    pub user_id: i32,
    pub category_id: Option<i32>,
    pub subscription_id: Option<i32>,
    pub amount: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub is_recurring: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: TransactionView,
    pub account: AccountView,
    pub category: Option<CategoryView>,
    pub subscription: Option<SubscriptionView>,
    pub debt: Option<DebtBrief>,
    pub loan_given: Option<LoanGivenBrief>,
}

impl Render for Transaction {
    type Shallow = TransactionView;

    fn shallow(&self) -> TransactionView {
        TransactionView {
            id: self.id,
            account_id: self.account_id,
            user_id: self.user_id,
            category_id: self.category_id,
            subscription_id: self.subscription_id,
            amount: money(&self.amount),
            description: self.description.clone(),
            date: self.date,
            is_recurring: self.is_recurring,
        }
    }
}

impl RenderDeep for Transaction {
    type Deep = TransactionDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<TransactionDetail, RepoError> {
        let account = repo.accounts().get(self.account_id)?;
        let category = match self.category_id {
            Some(id) => Some(repo.categories().get(id)?.shallow()),
            None => None,
        };
        let subscription = match self.subscription_id {
            Some(id) => Some(repo.subscriptions().get(id)?.shallow()),
            None => None,
        };
        let debt = match self.debt_id {
            Some(id) => Some(DebtBrief::from(&repo.debts().get(id)?)),
            None => None,
        };
        let loan_given = match self.loan_given_id {
            Some(id) => Some(LoanGivenBrief::from(&repo.loans_given().get(id)?)),
            None => None,
        };

        Ok(TransactionDetail {
            transaction: self.shallow(),
            account: account.shallow(),
            category,
            subscription,
            debt,
            loan_given,
        })
    }
}
