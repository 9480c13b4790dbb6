use crate::view::{money, shallow_all, Render, RenderDeep};
use chrono::{DateTime, Utc};
use finance_repo::models::{ForeignKey, Installment, InstallmentTransaction, Status};
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstallmentView {
    pub id: i32,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub amount: String,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub due_date: DateTime<Utc>,
    pub status: Status,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstallmentDetail {
    #[serde(flatten)]
    pub installment: InstallmentView,
    pub installment_links: Vec<InstallmentTransactionView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstallmentTransactionView {
    pub id: i32,
    pub installment_id: i32,
    pub transaction_id: i32,
    pub amount: String,
}

impl Render for Installment {
    type Shallow = InstallmentView;

    fn shallow(&self) -> InstallmentView {
        InstallmentView {
            id: self.id,
            debt_id: self.debt_id,
            loan_given_id: self.loan_given_id,
            amount: money(&self.amount),
            last_payment_date: self.last_payment_date,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

impl RenderDeep for Installment {
    type Deep = InstallmentDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<InstallmentDetail, RepoError> {
        let links = repo
            .installment_transactions()
            .list_by(ForeignKey::Installment(self.id))?;
        Ok(InstallmentDetail {
            installment: self.shallow(),
            installment_links: shallow_all(links),
        })
    }
}

impl Render for InstallmentTransaction {
    type Shallow = InstallmentTransactionView;

    fn shallow(&self) -> InstallmentTransactionView {
        InstallmentTransactionView {
            id: self.id,
            installment_id: self.installment_id,
            transaction_id: self.transaction_id,
            amount: money(&self.amount),
        }
    }
}
