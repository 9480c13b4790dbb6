pub mod generator;

use finance_repo::models::{Account, User};
use finance_repo::repo::FinanceRepo;
use std::sync::Arc;
use tracing::info;

pub fn build_repo() -> Arc<dyn FinanceRepo> {
    finance_repo::mem_repo::create_repo()
}

#[allow(dead_code)]
pub struct TestUser {
    pub user: User,
    pub account: Account,
}

#[allow(dead_code)]
impl TestUser {
    /// A fresh user with one account.
    pub fn new(repo: &Arc<dyn FinanceRepo>) -> TestUser {
        let user = repo
            .users()
            .create(generator::generate_new_user())
            .unwrap();
        let account = repo
            .accounts()
            .create(generator::generate_new_account(user.id))
            .unwrap();
        info!(user_id = user.id, "Created user");
        TestUser { user, account }
    }

    pub fn id(&self) -> i32 {
        self.user.id
    }
}
