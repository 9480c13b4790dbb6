use super::tags::{tag_or, Status};
use super::{push_some, Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const INSTALLMENT_PARENTS: &[&str] = &["debt_id", "loan_given_id"];

/// A scheduled partial payment against exactly one debt or loan given.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Installment {
    pub id: i32,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub amount: Decimal,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub due_date: DateTime<Utc>,
    pub status: Status,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewInstallment {
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl NewInstallment {
    pub fn for_debt(debt_id: i32, amount: Decimal, due_date: DateTime<Utc>) -> NewInstallment {
        NewInstallment {
            debt_id: Some(debt_id),
            amount: Some(amount),
            due_date: Some(due_date),
            ..NewInstallment::default()
        }
    }

    pub fn for_loan_given(
        loan_given_id: i32,
        amount: Decimal,
        due_date: DateTime<Utc>,
    ) -> NewInstallment {
        NewInstallment {
            loan_given_id: Some(loan_given_id),
            amount: Some(amount),
            due_date: Some(due_date),
            ..NewInstallment::default()
        }
    }
}

impl Entity for Installment {
    type New = NewInstallment;

    const KIND: EntityKind = EntityKind::Installment;

    fn build(
        new: NewInstallment,
        id: i32,
        _now: DateTime<Utc>,
    ) -> Result<Installment, ValidationError> {
        let installment = Installment {
            id,
            debt_id: new.debt_id,
            loan_given_id: new.loan_given_id,
            amount: required("amount", new.amount)?,
            last_payment_date: new.last_payment_date,
            due_date: required("due_date", new.due_date)?,
            status: tag_or(new.status, Status::default(), |tag| {
                Status::from_tag("status", tag)
            })?,
        };
        installment.validate()?;
        Ok(installment)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        let mut keys = Vec::with_capacity(1);
        push_some(&mut keys, self.debt_id, ForeignKey::Debt);
        push_some(&mut keys, self.loan_given_id, ForeignKey::LoanGiven);
        keys
    }

    fn key_for(id: i32) -> Option<ForeignKey> {
        Some(ForeignKey::Installment(id))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.debt_id.is_some() == self.loan_given_id.is_some() {
            return Err(ValidationError::ExactlyOne {
                fields: INSTALLMENT_PARENTS,
            });
        }
        validation::money("amount", &self.amount)
    }
}

/// Records that a transaction paid `amount` towards an installment.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct InstallmentTransaction {
    pub id: i32,
    pub installment_id: i32,
    pub transaction_id: i32,
    pub amount: Decimal,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewInstallmentTransaction {
    pub installment_id: Option<i32>,
    pub transaction_id: Option<i32>,
    pub amount: Option<Decimal>,
}

impl NewInstallmentTransaction {
    pub fn new(installment_id: i32, transaction_id: i32, amount: Decimal) -> Self {
        NewInstallmentTransaction {
            installment_id: Some(installment_id),
            transaction_id: Some(transaction_id),
            amount: Some(amount),
        }
    }
}

impl Entity for InstallmentTransaction {
    type New = NewInstallmentTransaction;

    const KIND: EntityKind = EntityKind::InstallmentTransaction;

    fn build(
        new: NewInstallmentTransaction,
        id: i32,
        _now: DateTime<Utc>,
    ) -> Result<InstallmentTransaction, ValidationError> {
        let link = InstallmentTransaction {
            id,
            installment_id: required("installment_id", new.installment_id)?,
            transaction_id: required("transaction_id", new.transaction_id)?,
            amount: required("amount", new.amount)?,
        };
        link.validate()?;
        Ok(link)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        vec![
            ForeignKey::Installment(self.installment_id),
            ForeignKey::Transaction(self.transaction_id),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::money("amount", &self.amount)
    }
}
