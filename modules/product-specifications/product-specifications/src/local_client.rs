//! Local client adapter implementing the SDK API trait.
//!
//! Bridges the domain services to `ProductSpecificationsApi` so other
//! modules in the same process can call them directly.

use async_trait::async_trait;
use product_specifications_sdk::{
    Assignment, AssignmentDraft, CategorySpecifications, ProductSpecificationsApi,
    ProductSpecificationsError, SecurityContext, SpecificationDetails, SpecificationHit,
};

use crate::domain::service::AppServices;

pub struct ProductSpecificationsLocalClient {
    services: AppServices,
}

impl ProductSpecificationsLocalClient {
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }
}

#[async_trait]
impl ProductSpecificationsApi for ProductSpecificationsLocalClient {
    async fn get_specification(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<SpecificationDetails, ProductSpecificationsError> {
        self.services
            .catalog
            .get_by_id(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn create_assignment(
        &self,
        ctx: &SecurityContext,
        draft: AssignmentDraft,
    ) -> Result<Assignment, ProductSpecificationsError> {
        self.services
            .assignments
            .create(ctx, draft)
            .await
            .map_err(Into::into)
    }

    async fn update_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
        draft: AssignmentDraft,
    ) -> Result<Assignment, ProductSpecificationsError> {
        self.services
            .assignments
            .update(ctx, id, draft)
            .await
            .map_err(Into::into)
    }

    async fn delete_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<(), ProductSpecificationsError> {
        self.services
            .assignments
            .delete(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn get_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<Assignment, ProductSpecificationsError> {
        self.services
            .assignments
            .get(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn search_specifications(
        &self,
        ctx: &SecurityContext,
        term: &str,
        category_id: i64,
        locale: Option<&str>,
    ) -> Result<Vec<SpecificationHit>, ProductSpecificationsError> {
        self.services
            .search
            .search(ctx, term, Some(category_id), locale)
            .await
            .map_err(Into::into)
    }

    async fn list_category_specifications(
        &self,
        ctx: &SecurityContext,
        category_id: i64,
    ) -> Result<CategorySpecifications, ProductSpecificationsError> {
        self.services
            .search
            .list_for_category(ctx, category_id)
            .await
            .map_err(Into::into)
    }
}
