use async_trait::async_trait;
use product_specifications_sdk::{
    Assignment, MultiValueOption, NewAssignment, Product, Specification,
};

/// Read-only access to the specification catalog.
#[async_trait]
pub trait SpecificationsRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Specification>>;

    async fn exists(&self, id: i64) -> anyhow::Result<bool>;

    /// Options of one specification, ordered by id.
    async fn multi_values(&self, specification_id: i64) -> anyhow::Result<Vec<MultiValueOption>>;

    /// Ids of the specifications linked to a category.
    async fn ids_for_category(&self, category_id: i64) -> anyhow::Result<Vec<i64>>;

    /// Full records for `ids`, ordered by id. Unknown ids are skipped.
    async fn list_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Specification>>;
}

/// Read-only access to catalog products.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Product>>;
}

/// How the scalar path treats an empty summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueWriteOptions {
    /// Delete the stored translation for the locale instead of leaving it.
    pub clear_translation_on_empty_summary: bool,
}

/// Persistence for assignments and their polymorphic values.
///
/// `create` and `update` write the assignment row and replace its value rows
/// in a single transaction.
#[async_trait]
pub trait AssignmentsRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Assignment>>;

    async fn create(
        &self,
        creator_id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Assignment>;

    /// Returns `None` when no assignment `id` belongs to `new.product_id`;
    /// nothing is written in that case.
    async fn update(
        &self,
        id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Option<Assignment>>;

    /// Returns true if a row was deleted.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
