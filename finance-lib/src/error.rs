use finance_repo::models::EntityKind;
use finance_repo::repo::RepoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0} has no deep view")]
    NoDeepView(EntityKind),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("Unable to encode view: {0}")]
    Json(#[from] serde_json::Error),
}
