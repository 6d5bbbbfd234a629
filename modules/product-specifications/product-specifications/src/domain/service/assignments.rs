use std::sync::Arc;

use product_specifications_sdk::{Assignment, AssignmentDraft, SecurityContext};
use tracing::{debug, info, instrument};

use super::{ServiceConfig, authorize};
use crate::domain::error::DomainError;
use crate::domain::ports::CapabilityGate;
use crate::domain::repo::{AssignmentsRepository, ProductsRepository};
use crate::domain::validator::AssignmentValidator;

/// Assignment lifecycle: validate, resolve the owning product, persist the
/// row and replace its values.
pub struct AssignmentsService {
    repo: Arc<dyn AssignmentsRepository>,
    products: Arc<dyn ProductsRepository>,
    validator: AssignmentValidator,
    gate: Arc<dyn CapabilityGate>,
    config: ServiceConfig,
}

impl AssignmentsService {
    pub fn new(
        repo: Arc<dyn AssignmentsRepository>,
        products: Arc<dyn ProductsRepository>,
        validator: AssignmentValidator,
        gate: Arc<dyn CapabilityGate>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            products,
            validator,
            gate,
            config,
        }
    }

    #[instrument(skip(self, ctx), fields(assignment.id = id))]
    pub async fn get(&self, ctx: &SecurityContext, id: i64) -> Result<Assignment, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;
        debug!("Getting assignment by id");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::assignment_not_found(id))
    }

    /// Create an assignment owned by the draft's product.
    ///
    /// The creator id is copied from the product.
    #[instrument(skip(self, ctx, draft))]
    pub async fn create(
        &self,
        ctx: &SecurityContext,
        draft: AssignmentDraft,
    ) -> Result<Assignment, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;
        let new = self.validator.validate(draft).await?;

        let product = self
            .products
            .find_by_id(new.product_id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(new.product_id))?;

        let created = self
            .repo
            .create(product.creator_id, &new, self.config.value_write_options())
            .await?;

        info!(
            assignment.id = created.id,
            product.id = created.product_id,
            input_type = %created.input_type,
            "Created specification assignment"
        );
        Ok(created)
    }

    /// Update an assignment of the draft's product.
    ///
    /// The specification id of the draft is validated but never applied.
    #[instrument(skip(self, ctx, draft), fields(assignment.id = id))]
    pub async fn update(
        &self,
        ctx: &SecurityContext,
        id: i64,
        draft: AssignmentDraft,
    ) -> Result<Assignment, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;
        let new = self.validator.validate(draft).await?;

        if self.products.find_by_id(new.product_id).await?.is_none() {
            return Err(DomainError::product_not_found(new.product_id));
        }

        let updated = self
            .repo
            .update(id, &new, self.config.value_write_options())
            .await?
            .ok_or_else(|| DomainError::assignment_not_found(id))?;

        info!(
            product.id = updated.product_id,
            input_type = %updated.input_type,
            "Updated specification assignment"
        );
        Ok(updated)
    }

    /// Delete an assignment with its values. Unknown ids are a no-op.
    #[instrument(skip(self, ctx), fields(assignment.id = id))]
    pub async fn delete(&self, ctx: &SecurityContext, id: i64) -> Result<(), DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;

        if self.repo.delete(id).await? {
            info!("Deleted specification assignment");
        } else {
            debug!("Assignment to delete does not exist");
        }
        Ok(())
    }
}
