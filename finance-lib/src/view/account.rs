use crate::view::{money, Render};
use chrono::{DateTime, Utc};
use finance_repo::models::{Account, AccountType};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AccountView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub balance: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub created_at: DateTime<Utc>,
}

impl Render for Account {
    type Shallow = AccountView;

    fn shallow(&self) -> AccountView {
        AccountView {
            id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            balance: money(&self.balance),
            account_type: self.account_type,
            created_at: self.created_at,
        }
    }
}
