//! Seed data for a fresh repository.
//!
//! A fixture is a JSON document holding one array of insert payloads per
//! table. Rows are inserted parents first, so ids follow array order starting
//! at 1 within each table.

use anyhow::Context;
use finance_repo::models::{
    Entity, NewAccount, NewCategory, NewDebt, NewInstallment, NewInstallmentTransaction,
    NewLoanGiven, NewReminder, NewSubscription, NewTransaction, NewUser,
};
use finance_repo::repo::{EntityRepo, FinanceRepo};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Fixture {
    pub users: Vec<NewUser>,
    pub accounts: Vec<NewAccount>,
    pub categories: Vec<NewCategory>,
    pub subscriptions: Vec<NewSubscription>,
    pub debts: Vec<NewDebt>,
    pub loans_given: Vec<NewLoanGiven>,
    pub transactions: Vec<NewTransaction>,
    pub installments: Vec<NewInstallment>,
    pub installment_transactions: Vec<NewInstallmentTransaction>,
    pub reminders: Vec<NewReminder>,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Fixture, anyhow::Error> {
        serde_json::from_str(json).context("Unable to parse fixture")
    }

    pub fn from_file(path: &Path) -> Result<Fixture, anyhow::Error> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read fixture file {}", path.display()))?;
        Fixture::from_json(&json)
    }

    /// Inserts every row and returns how many were stored.
    ///
    /// Not atomic: on error the rows inserted before the failing one stay in
    /// `repo`, so a failed load leaves it partly populated.
    pub fn load_into(self, repo: &dyn FinanceRepo) -> Result<usize, anyhow::Error> {
        let mut count = 0;
        count += insert_all(repo.users(), "users", self.users)?;
        count += insert_all(repo.accounts(), "accounts", self.accounts)?;
        count += insert_all(repo.categories(), "categories", self.categories)?;
        count += insert_all(repo.subscriptions(), "subscriptions", self.subscriptions)?;
        count += insert_all(repo.debts(), "debts", self.debts)?;
        count += insert_all(repo.loans_given(), "loans_given", self.loans_given)?;
        count += insert_all(repo.transactions(), "transactions", self.transactions)?;
        count += insert_all(repo.installments(), "installments", self.installments)?;
        count += insert_all(
            repo.installment_transactions(),
            "installment_transactions",
            self.installment_transactions,
        )?;
        count += insert_all(repo.reminders(), "reminders", self.reminders)?;

        info!(count, "Fixture loaded");
        Ok(count)
    }
}

fn insert_all<T: Entity>(
    repo: &dyn EntityRepo<T>,
    table: &str,
    rows: Vec<T::New>,
) -> Result<usize, anyhow::Error> {
    let count = rows.len();
    for (index, new) in rows.into_iter().enumerate() {
        repo.create(new)
            .with_context(|| format!("Unable to load {}[{}]", table, index))?;
    }
    if count > 0 {
        info!(table, count, "Loaded rows");
    }
    Ok(count)
}
