use crate::view::{money, shallow_all, ReminderView, Render, RenderDeep, TransactionView};
use chrono::{DateTime, Utc};
use finance_repo::models::{ForeignKey, Frequency, Subscription};
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SubscriptionView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub price: String,
    pub frequency: Frequency,
    pub payment_date: DateTime<Utc>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SubscriptionDetail {
    #[serde(flatten)]
    pub subscription: SubscriptionView,
    pub transactions: Vec<TransactionView>,
    pub reminders: Vec<ReminderView>,
}

impl Render for Subscription {
    type Shallow = SubscriptionView;

    fn shallow(&self) -> SubscriptionView {
        SubscriptionView {
            id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            price: money(&self.price),
            frequency: self.frequency,
            payment_date: self.payment_date,
            last_payment_date: self.last_payment_date,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl RenderDeep for Subscription {
    type Deep = SubscriptionDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<SubscriptionDetail, RepoError> {
        let key = ForeignKey::Subscription(self.id);
        Ok(SubscriptionDetail {
            subscription: self.shallow(),
            transactions: shallow_all(repo.transactions().list_by(key)?),
            reminders: shallow_all(repo.reminders().list_by(key)?),
        })
    }
}
