use std::sync::Arc;

use product_specifications_sdk::{InputType, SecurityContext, Specification, SpecificationDetails};
use tracing::{debug, instrument};

use super::authorize;
use crate::domain::error::DomainError;
use crate::domain::ports::CapabilityGate;
use crate::domain::repo::SpecificationsRepository;

/// Lookup of specification definitions and their option sets.
pub struct SpecificationCatalog {
    repo: Arc<dyn SpecificationsRepository>,
    gate: Arc<dyn CapabilityGate>,
}

impl SpecificationCatalog {
    pub fn new(repo: Arc<dyn SpecificationsRepository>, gate: Arc<dyn CapabilityGate>) -> Self {
        Self { repo, gate }
    }

    /// A definition plus its options; options are only loaded for
    /// `multi_value` specifications.
    #[instrument(skip(self, ctx), fields(specification.id = id))]
    pub async fn get_by_id(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<SpecificationDetails, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;
        debug!("Getting specification by id");

        let specification = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::specification_not_found(id))?;

        let multi_values = if specification.input_type == InputType::MultiValue {
            self.repo.multi_values(id).await?
        } else {
            Vec::new()
        };

        Ok(SpecificationDetails {
            specification,
            multi_values,
        })
    }

    /// Every specification linked to the category, ordered by id.
    #[instrument(skip(self, ctx), fields(category.id = category_id))]
    pub async fn list_by_category(
        &self,
        ctx: &SecurityContext,
        category_id: i64,
    ) -> Result<Vec<Specification>, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;
        self.linked(category_id).await
    }

    pub(super) async fn linked_specifications(
        repo: &dyn SpecificationsRepository,
        category_id: i64,
    ) -> Result<Vec<Specification>, DomainError> {
        let ids = repo.ids_for_category(category_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(repo.list_by_ids(&ids).await?)
    }

    async fn linked(&self, category_id: i64) -> Result<Vec<Specification>, DomainError> {
        Self::linked_specifications(self.repo.as_ref(), category_id).await
    }
}
