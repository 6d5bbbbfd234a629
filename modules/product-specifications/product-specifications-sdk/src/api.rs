//! `ProductSpecificationsApi` trait definition.
//!
//! All methods require a `SecurityContext`; each call is checked against the
//! store editing capability before anything is read or written.

use async_trait::async_trait;

use crate::errors::ProductSpecificationsError;
use crate::models::{
    Assignment, AssignmentDraft, CategorySpecifications, SpecificationDetails, SpecificationHit,
};
use crate::security::SecurityContext;

/// Public API trait for the product-specifications module.
///
/// Other modules hold an `Arc<dyn ProductSpecificationsApi>` obtained from the
/// module's local client.
#[async_trait]
pub trait ProductSpecificationsApi: Send + Sync {
    /// Get a specification definition with its multi-value options.
    async fn get_specification(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<SpecificationDetails, ProductSpecificationsError>;

    /// Validate a draft and create a new assignment with its values.
    async fn create_assignment(
        &self,
        ctx: &SecurityContext,
        draft: AssignmentDraft,
    ) -> Result<Assignment, ProductSpecificationsError>;

    /// Validate a draft and update an assignment owned by the draft's product,
    /// replacing its values.
    async fn update_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
        draft: AssignmentDraft,
    ) -> Result<Assignment, ProductSpecificationsError>;

    /// Delete an assignment and its values. Unknown ids are a no-op.
    async fn delete_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<(), ProductSpecificationsError>;

    /// Get an assignment with its current values.
    async fn get_assignment(
        &self,
        ctx: &SecurityContext,
        id: i64,
    ) -> Result<Assignment, ProductSpecificationsError>;

    /// Substring search over the titles of a category's specifications.
    async fn search_specifications(
        &self,
        ctx: &SecurityContext,
        term: &str,
        category_id: i64,
        locale: Option<&str>,
    ) -> Result<Vec<SpecificationHit>, ProductSpecificationsError>;

    /// All specifications linked to a category plus the default locale.
    async fn list_category_specifications(
        &self,
        ctx: &SecurityContext,
        category_id: i64,
    ) -> Result<CategorySpecifications, ProductSpecificationsError>;
}
