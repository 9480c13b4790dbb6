//! Serialized views of stored rows.
//!
//! Every entity has a shallow view: its own columns, foreign keys as raw ids,
//! tags as their lowercase names, money as two-decimal strings and timestamps
//! as ISO-8601 strings. Some entities also have a deep view, which adds related
//! rows looked up through a [`FinanceRepo`]. Related collections are rendered
//! one level down only, in id order.

use finance_repo::repo::{FinanceRepo, RepoError};
use rust_decimal::Decimal;
use serde::Serialize;

mod account;
mod category;
mod debt;
mod installment;
mod reminder;
mod subscription;
mod transaction;
mod user;

pub use account::AccountView;
pub use category::{CategoryDetail, CategoryView};
pub use debt::{DebtBrief, DebtDetail, DebtView, LoanGivenBrief, LoanGivenDetail, LoanGivenView};
pub use installment::{InstallmentDetail, InstallmentTransactionView, InstallmentView};
pub use reminder::ReminderView;
pub use subscription::{SubscriptionDetail, SubscriptionView};
pub use transaction::{TransactionDetail, TransactionView};
pub use user::{UserDetail, UserView};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Depth {
    #[default]
    Shallow,
    Deep,
}

/// Result of rendering at a chosen [`Depth`]. Untagged on the wire, so the
/// JSON is just the flat or nested object.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum View<S, D> {
    Shallow(S),
    Deep(D),
}

pub trait Render {
    type Shallow: Serialize;

    fn shallow(&self) -> Self::Shallow;
}

pub trait RenderDeep: Render {
    type Deep: Serialize;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<Self::Deep, RepoError>;

    fn render(
        &self,
        repo: &dyn FinanceRepo,
        depth: Depth,
    ) -> Result<View<Self::Shallow, Self::Deep>, RepoError> {
        match depth {
            Depth::Shallow => Ok(View::Shallow(self.shallow())),
            Depth::Deep => Ok(View::Deep(self.deep(repo)?)),
        }
    }
}

pub(crate) fn money(value: &Decimal) -> String {
    format!("{:.2}", value)
}

pub(crate) fn shallow_all<T: Render>(rows: Vec<T>) -> Vec<T::Shallow> {
    rows.iter().map(Render::shallow).collect()
}
