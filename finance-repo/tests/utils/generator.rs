#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use finance_repo::models::{
    AccountType, NewAccount, NewCategory, NewDebt, NewLoanGiven, NewSubscription,
    NewTransaction, NewUser,
};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn generate_amount() -> Decimal {
    Decimal::new((-1_000_000..1_000_000).fake::<i64>(), 2)
}

pub fn generate_positive_amount() -> Decimal {
    Decimal::new((1..1_000_000).fake::<i64>(), 2)
}

pub fn generate_date() -> DateTime<Utc> {
    let seconds = (1_500_000_000..1_800_000_000).fake::<i64>();
    Utc.timestamp_opt(seconds, 0).unwrap()
}

pub fn generate_new_user() -> NewUser {
    let name: String = Name().fake();
    let email = format!("test-user-{}@example.com", Uuid::new_v4());
    NewUser::new(&name, &email, "not a real hash")
}

pub fn generate_new_account(user_id: i32) -> NewAccount {
    let account_type = AccountType::TAGS
        .choose(&mut rand::thread_rng())
        .unwrap();
    let name: String = CompanyName().fake();
    NewAccount::new(user_id, &name, account_type).with_balance(generate_amount())
}

pub fn generate_new_category(user_id: i32) -> NewCategory {
    let category_type = ["income", "expense"]
        .choose(&mut rand::thread_rng())
        .unwrap();
    NewCategory::new(user_id, "Groceries", category_type)
}

pub fn generate_new_transaction(account_id: i32, user_id: i32) -> NewTransaction {
    NewTransaction {
        description: Some(Sentence(3..6).fake()),
        date: Some(generate_date()),
        ..NewTransaction::new(account_id, user_id, generate_amount())
    }
}

pub fn generate_new_subscription(user_id: i32) -> NewSubscription {
    NewSubscription::new(
        user_id,
        "Streaming",
        generate_positive_amount(),
        "monthly",
        generate_date(),
    )
}

pub fn generate_new_debt(user_id: i32) -> NewDebt {
    let creditor: String = Name().fake();
    let total = generate_positive_amount();
    NewDebt::new(user_id, &creditor, total, total)
}

pub fn generate_new_loan_given(user_id: i32) -> NewLoanGiven {
    let debtor: String = Name().fake();
    let total = generate_positive_amount();
    NewLoanGiven::new(user_id, &debtor, total, total)
}
