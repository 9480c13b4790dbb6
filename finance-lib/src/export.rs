//! Renders a single stored row, looked up by kind and id, as JSON.

use crate::error::ExportError;
use crate::view::{Depth, Render, RenderDeep};
use finance_repo::models::EntityKind;
use finance_repo::repo::FinanceRepo;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub fn render(
    repo: &dyn FinanceRepo,
    kind: EntityKind,
    id: i32,
    depth: Depth,
) -> Result<Value, ExportError> {
    debug!(%kind, id, ?depth, "Rendering row");
    match kind {
        EntityKind::User => deep_or_shallow(repo, &repo.users().get(id)?, depth),
        EntityKind::Category => deep_or_shallow(repo, &repo.categories().get(id)?, depth),
        EntityKind::Transaction => deep_or_shallow(repo, &repo.transactions().get(id)?, depth),
        EntityKind::Subscription => deep_or_shallow(repo, &repo.subscriptions().get(id)?, depth),
        EntityKind::Debt => deep_or_shallow(repo, &repo.debts().get(id)?, depth),
        EntityKind::LoanGiven => deep_or_shallow(repo, &repo.loans_given().get(id)?, depth),
        EntityKind::Installment => deep_or_shallow(repo, &repo.installments().get(id)?, depth),
        EntityKind::Account => shallow_only(kind, &repo.accounts().get(id)?, depth),
        EntityKind::InstallmentTransaction => {
            shallow_only(kind, &repo.installment_transactions().get(id)?, depth)
        }
        EntityKind::Reminder => shallow_only(kind, &repo.reminders().get(id)?, depth),
    }
}

fn deep_or_shallow<T: RenderDeep>(
    repo: &dyn FinanceRepo,
    row: &T,
    depth: Depth,
) -> Result<Value, ExportError> {
    to_value(&row.render(repo, depth)?)
}

fn shallow_only<T: Render>(kind: EntityKind, row: &T, depth: Depth) -> Result<Value, ExportError> {
    match depth {
        Depth::Shallow => to_value(&row.shallow()),
        Depth::Deep => Err(ExportError::NoDeepView(kind)),
    }
}

fn to_value<S: Serialize>(view: &S) -> Result<Value, ExportError> {
    Ok(serde_json::to_value(view)?)
}
