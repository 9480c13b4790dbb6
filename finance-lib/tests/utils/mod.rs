#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use finance_repo::models::{Account, NewAccount, NewTransaction, NewUser, Transaction, User};
use finance_repo::repo::FinanceRepo;
use rstest::*;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing::Level;
use uuid::Uuid;

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn FinanceRepo> {
    finance_repo::mem_repo::create_repo()
}

pub fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn create_user(repo: &Arc<dyn FinanceRepo>) -> User {
    let email = format!("test-user-{}@example.com", Uuid::new_v4());
    let user = repo
        .users()
        .create(NewUser {
            created_at: Some(at(2024, 1, 1)),
            ..NewUser::new("Test User", &email, "not a real hash")
        })
        .unwrap();
    info!(user_id = user.id, "Created user");
    user
}

/// One user with a bank account holding 100.00 and a single grocery
/// transaction of -25.00.
pub struct Scenario {
    pub user: User,
    pub account: Account,
    pub transaction: Transaction,
}

impl Scenario {
    pub fn new(repo: &Arc<dyn FinanceRepo>) -> Scenario {
        let user = create_user(repo);
        let account = repo
            .accounts()
            .create(NewAccount {
                created_at: Some(at(2024, 1, 1)),
                ..NewAccount::new(user.id, "Checking", "bank").with_balance(amount("100.00"))
            })
            .unwrap();
        let transaction = repo
            .transactions()
            .create(NewTransaction {
                description: Some("Groceries".to_owned()),
                date: Some(at(2024, 3, 1)),
                ..NewTransaction::new(account.id, user.id, amount("-25.00"))
            })
            .unwrap();
        Scenario {
            user,
            account,
            transaction,
        }
    }
}

/// Object keys of a rendered view, sorted.
pub fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

pub fn sorted(expected: &[&str]) -> Vec<String> {
    let mut keys: Vec<String> = expected.iter().map(|key| key.to_string()).collect();
    keys.sort();
    keys
}

pub fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}
