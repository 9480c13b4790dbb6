use crate::view::{
    money, shallow_all, InstallmentDetail, ReminderView, Render, RenderDeep, TransactionView,
};
use chrono::{DateTime, Utc};
use finance_repo::models::{Debt, ForeignKey, Installment, LoanGiven, Status};
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DebtView {
    pub id: i32,
    pub user_id: i32,
    pub creditor: String,
    pub total_amount: String,
    pub remaining_amount: String,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DebtDetail {
    #[serde(flatten)]
    pub debt: DebtView,
    pub transactions: Vec<TransactionView>,
    pub installments: Vec<InstallmentDetail>,
    pub reminders: Vec<ReminderView>,
}

/// Summary embedded in a transaction's deep form.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DebtBrief {
    pub id: i32,
    pub creditor: String,
    pub remaining_amount: String,
    pub status: Status,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LoanGivenView {
    pub id: i32,
    pub user_id: i32,
    pub debtor: String,
    pub total_amount: String,
    pub remaining_amount: String,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LoanGivenDetail {
    #[serde(flatten)]
    pub loan_given: LoanGivenView,
    pub transactions: Vec<TransactionView>,
    pub installments: Vec<InstallmentDetail>,
    pub reminders: Vec<ReminderView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LoanGivenBrief {
    pub id: i32,
    pub debtor: String,
    pub remaining_amount: String,
    pub status: Status,
}

fn installment_details(
    repo: &dyn FinanceRepo,
    installments: Vec<Installment>,
) -> Result<Vec<InstallmentDetail>, RepoError> {
    installments
        .iter()
        .map(|installment| installment.deep(repo))
        .collect()
}

impl Render for Debt {
    type Shallow = DebtView;

    fn shallow(&self) -> DebtView {
        DebtView {
            id: self.id,
            user_id: self.user_id,
            creditor: self.creditor.clone(),
            total_amount: money(&self.total_amount),
            remaining_amount: money(&self.remaining_amount),
            last_payment_date: self.last_payment_date,
            payment_date: self.payment_date,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

impl RenderDeep for Debt {
    type Deep = DebtDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<DebtDetail, RepoError> {
        let key = ForeignKey::Debt(self.id);
        Ok(DebtDetail {
            debt: self.shallow(),
            transactions: shallow_all(repo.transactions().list_by(key)?),
            installments: installment_details(repo, repo.installments().list_by(key)?)?,
            reminders: shallow_all(repo.reminders().list_by(key)?),
        })
    }
}

impl From<&Debt> for DebtBrief {
    fn from(debt: &Debt) -> Self {
        DebtBrief {
            id: debt.id,
            creditor: debt.creditor.clone(),
            remaining_amount: money(&debt.remaining_amount),
            status: debt.status,
        }
    }
}

impl Render for LoanGiven {
    type Shallow = LoanGivenView;

    fn shallow(&self) -> LoanGivenView {
        LoanGivenView {
            id: self.id,
            user_id: self.user_id,
            debtor: self.debtor.clone(),
            total_amount: money(&self.total_amount),
            remaining_amount: money(&self.remaining_amount),
            last_payment_date: self.last_payment_date,
            payment_date: self.payment_date,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

impl RenderDeep for LoanGiven {
    type Deep = LoanGivenDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<LoanGivenDetail, RepoError> {
        let key = ForeignKey::LoanGiven(self.id);
        Ok(LoanGivenDetail {
            loan_given: self.shallow(),
            transactions: shallow_all(repo.transactions().list_by(key)?),
            installments: installment_details(repo, repo.installments().list_by(key)?)?,
            reminders: shallow_all(repo.reminders().list_by(key)?),
        })
    }
}

impl From<&LoanGiven> for LoanGivenBrief {
    fn from(loan: &LoanGiven) -> Self {
        LoanGivenBrief {
            id: loan.id,
            debtor: loan.debtor.clone(),
            remaining_amount: money(&loan.remaining_amount),
            status: loan.status,
        }
    }
}
