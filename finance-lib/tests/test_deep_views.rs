use std::sync::Arc;

use finance_lib::view::{Depth, Render, RenderDeep, View};
use finance_repo::models::{
    NewAccount, NewCategory, NewDebt, NewInstallment, NewInstallmentTransaction, NewLoanGiven,
    NewReminder, NewSubscription, NewTransaction,
};
use finance_repo::repo::FinanceRepo;
use rstest::rstest;
use serde_json::json;
use tracing::instrument;
use utils::{amount, at, create_user, ids, keys, repo, sorted, tracing_setup, Scenario};

mod utils;

#[instrument(skip(repo))]
#[rstest]
fn test_user_deep_only_includes_own_rows(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let first = Scenario::new(&repo);
    let second = Scenario::new(&repo);

    let extra_account = repo
        .accounts()
        .create(NewAccount::new(first.user.id, "Wallet", "cash"))
        .unwrap();
    let extra_transaction = repo
        .transactions()
        .create(NewTransaction::new(extra_account.id, first.user.id, amount("3.20")))
        .unwrap();
    let category = repo
        .categories()
        .create(NewCategory::new(first.user.id, "Salary", "income"))
        .unwrap();
    repo.categories()
        .create(NewCategory::new(second.user.id, "Rent", "expense"))
        .unwrap();
    let debt = repo
        .debts()
        .create(NewDebt::new(first.user.id, "Bank", amount("500"), amount("500")))
        .unwrap();
    let reminder = repo
        .reminders()
        .create(NewReminder {
            debt_id: Some(debt.id),
            ..NewReminder::new(first.user.id, "debt", "Pay", at(2024, 5, 1))
        })
        .unwrap();

    let value = serde_json::to_value(first.user.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(
        keys(&value),
        sorted(&[
            "id",
            "full_name",
            "email",
            "currency",
            "created_at",
            "accounts",
            "transactions",
            "categories",
            "subscriptions",
            "loans_given",
            "debts",
            "reminders"
        ])
    );
    assert_eq!(
        ids(&value["accounts"]),
        vec![first.account.id as i64, extra_account.id as i64]
    );
    assert_eq!(
        ids(&value["transactions"]),
        vec![first.transaction.id as i64, extra_transaction.id as i64]
    );
    assert_eq!(ids(&value["categories"]), vec![category.id as i64]);
    assert_eq!(ids(&value["debts"]), vec![debt.id as i64]);
    assert_eq!(ids(&value["reminders"]), vec![reminder.id as i64]);
    assert_eq!(value["subscriptions"], json!([]));
    assert_eq!(value["loans_given"], json!([]));

    // Embedded rows are shallow.
    assert!(value["accounts"][0].get("transactions").is_none());
    assert!(!value.to_string().contains("not a real hash"));

    let other = serde_json::to_value(second.user.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(ids(&other["accounts"]), vec![second.account.id as i64]);
    assert_eq!(ids(&other["transactions"]), vec![second.transaction.id as i64]);
    assert_eq!(other["debts"], json!([]));
}

#[instrument(skip(repo))]
#[rstest]
fn test_transaction_deep_without_category(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);

    let value = serde_json::to_value(scenario.transaction.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(value["category_id"], json!(null));
    assert_eq!(value["category"], json!(null));
    assert_eq!(value["subscription"], json!(null));
    assert_eq!(value["debt"], json!(null));
    assert_eq!(value["loan_given"], json!(null));
    assert_eq!(value["account"]["balance"], "100.00");
    assert_eq!(value["amount"], "-25.00");
}

#[instrument(skip(repo))]
#[rstest]
fn test_transaction_deep_with_relations(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);
    let user_id = scenario.user.id;
    let category = repo
        .categories()
        .create(NewCategory::new(user_id, "Loans", "expense"))
        .unwrap();
    let debt = repo
        .debts()
        .create(NewDebt::new(user_id, "Bank", amount("1000"), amount("750.5")))
        .unwrap();
    let loan = repo
        .loans_given()
        .create(NewLoanGiven {
            status: Some("overdue".to_owned()),
            ..NewLoanGiven::new(user_id, "Sam", amount("40"), amount("10"))
        })
        .unwrap();
    let transaction = repo
        .transactions()
        .create(NewTransaction {
            category_id: Some(category.id),
            debt_id: Some(debt.id),
            loan_given_id: Some(loan.id),
            ..NewTransaction::new(scenario.account.id, user_id, amount("-249.50"))
        })
        .unwrap();

    // Shallow form keeps only the category and subscription links.
    let shallow = serde_json::to_value(transaction.shallow()).unwrap();
    assert_eq!(shallow["category_id"], category.id);
    assert!(shallow.get("debt_id").is_none());
    assert!(shallow.get("loan_given_id").is_none());

    let value = serde_json::to_value(transaction.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(
        value["category"],
        json!({"id": category.id, "user_id": user_id, "name": "Loans", "type": "expense"})
    );
    assert_eq!(
        value["debt"],
        json!({"id": debt.id, "creditor": "Bank", "remaining_amount": "750.50", "status": "pending"})
    );
    assert_eq!(
        value["loan_given"],
        json!({"id": loan.id, "debtor": "Sam", "remaining_amount": "10.00", "status": "overdue"})
    );
}

#[instrument(skip(repo))]
#[rstest]
fn test_category_deep_lists_transactions(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);
    let user_id = scenario.user.id;
    let category = repo
        .categories()
        .create(NewCategory::new(user_id, "Food", "expense"))
        .unwrap();
    let mut expected = Vec::new();
    for value in ["1.00", "2.00", "3.00"] {
        let transaction = repo
            .transactions()
            .create(NewTransaction {
                category_id: Some(category.id),
                ..NewTransaction::new(scenario.account.id, user_id, amount(value))
            })
            .unwrap();
        expected.push(transaction.id as i64);
    }

    let value = serde_json::to_value(category.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(ids(&value["transactions"]), expected);
    assert!(value["transactions"][0].get("category").is_none());
    assert_eq!(value["transactions"][2]["amount"], "3.00");
}

#[instrument(skip(repo))]
#[rstest]
fn test_subscription_deep(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);
    let user_id = scenario.user.id;
    let subscription = repo
        .subscriptions()
        .create(NewSubscription::new(
            user_id,
            "Gym",
            amount("30"),
            "monthly",
            at(2024, 3, 10),
        ))
        .unwrap();
    let transaction = repo
        .transactions()
        .create(NewTransaction {
            subscription_id: Some(subscription.id),
            is_recurring: Some(true),
            ..NewTransaction::new(scenario.account.id, user_id, amount("-30"))
        })
        .unwrap();
    let reminder = repo
        .reminders()
        .create(NewReminder {
            subscription_id: Some(subscription.id),
            ..NewReminder::new(user_id, "subscription", "Gym renews", at(2024, 4, 9))
        })
        .unwrap();

    let value = serde_json::to_value(subscription.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(ids(&value["transactions"]), vec![transaction.id as i64]);
    assert_eq!(value["transactions"][0]["is_recurring"], true);
    assert_eq!(ids(&value["reminders"]), vec![reminder.id as i64]);
    assert_eq!(value["price"], "30.00");
}

#[instrument(skip(repo))]
#[rstest]
fn test_debt_deep_includes_installment_links(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);
    let user_id = scenario.user.id;
    let debt = repo
        .debts()
        .create(NewDebt::new(user_id, "Bank", amount("600"), amount("400")))
        .unwrap();
    let first = repo
        .installments()
        .create(NewInstallment {
            status: Some("paid".to_owned()),
            ..NewInstallment::for_debt(debt.id, amount("200"), at(2024, 2, 1))
        })
        .unwrap();
    let second = repo
        .installments()
        .create(NewInstallment::for_debt(debt.id, amount("200"), at(2024, 3, 1)))
        .unwrap();
    let payment = repo
        .transactions()
        .create(NewTransaction {
            debt_id: Some(debt.id),
            ..NewTransaction::new(scenario.account.id, user_id, amount("-200"))
        })
        .unwrap();
    let link = repo
        .installment_transactions()
        .create(NewInstallmentTransaction::new(first.id, payment.id, amount("200")))
        .unwrap();

    let value = serde_json::to_value(debt.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(ids(&value["transactions"]), vec![payment.id as i64]);
    assert_eq!(
        ids(&value["installments"]),
        vec![first.id as i64, second.id as i64]
    );
    assert_eq!(
        value["installments"][0]["installment_links"],
        json!([{
            "id": link.id,
            "installment_id": first.id,
            "transaction_id": payment.id,
            "amount": "200.00"
        }])
    );
    assert_eq!(value["installments"][0]["status"], "paid");
    assert_eq!(value["installments"][1]["installment_links"], json!([]));
    assert_eq!(value["reminders"], json!([]));

    let installment = serde_json::to_value(first.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(installment, value["installments"][0]);
}

#[instrument(skip(repo))]
#[rstest]
fn test_loan_given_deep(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let user = create_user(&repo);
    let loan = repo
        .loans_given()
        .create(NewLoanGiven::new(user.id, "Alex", amount("80"), amount("80")))
        .unwrap();
    let installment = repo
        .installments()
        .create(NewInstallment::for_loan_given(loan.id, amount("40"), at(2024, 6, 1)))
        .unwrap();
    let reminder = repo
        .reminders()
        .create(NewReminder {
            loan_given_id: Some(loan.id),
            ..NewReminder::new(user.id, "loan_given", "Ask Alex", at(2024, 6, 1))
        })
        .unwrap();

    let value = serde_json::to_value(loan.deep(repo.as_ref()).unwrap()).unwrap();
    assert_eq!(value["debtor"], "Alex");
    assert_eq!(value["transactions"], json!([]));
    assert_eq!(ids(&value["installments"]), vec![installment.id as i64]);
    assert_eq!(value["installments"][0]["loan_given_id"], loan.id);
    assert_eq!(ids(&value["reminders"]), vec![reminder.id as i64]);
}

#[instrument(skip(repo))]
#[rstest]
fn test_render_selects_depth(_tracing_setup: &(), repo: Arc<dyn FinanceRepo>) {
    let scenario = Scenario::new(&repo);

    let shallow = scenario
        .transaction
        .render(repo.as_ref(), Depth::default())
        .unwrap();
    assert!(matches!(shallow, View::Shallow(_)));
    assert_eq!(
        serde_json::to_value(&shallow).unwrap(),
        serde_json::to_value(scenario.transaction.shallow()).unwrap()
    );

    let deep = scenario
        .transaction
        .render(repo.as_ref(), Depth::Deep)
        .unwrap();
    assert!(matches!(deep, View::Deep(_)));

    // Rendering leaves the store untouched and is repeatable.
    let again = scenario
        .transaction
        .render(repo.as_ref(), Depth::Deep)
        .unwrap();
    assert_eq!(deep, again);
    assert_eq!(repo.transactions().get(scenario.transaction.id).unwrap(), scenario.transaction);
}
