use crate::view::{shallow_all, Render, RenderDeep, TransactionView};
use finance_repo::models::{Category, CategoryType, ForeignKey};
use finance_repo::repo::{FinanceRepo, RepoError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: CategoryView,
    pub transactions: Vec<TransactionView>,
}

impl Render for Category {
    type Shallow = CategoryView;

    fn shallow(&self) -> CategoryView {
        CategoryView {
            id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            category_type: self.category_type,
        }
    }
}

impl RenderDeep for Category {
    type Deep = CategoryDetail;

    fn deep(&self, repo: &dyn FinanceRepo) -> Result<CategoryDetail, RepoError> {
        let transactions = repo
            .transactions()
            .list_by(ForeignKey::Category(self.id))?;
        Ok(CategoryDetail {
            category: self.shallow(),
            transactions: shallow_all(transactions),
        })
    }
}
