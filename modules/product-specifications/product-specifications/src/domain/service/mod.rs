//! Domain service layer - business logic and rules.
//!
//! One service per component:
//! - `catalog` - specification lookup with option sets
//! - `search` - category-scoped title search and category listing
//! - `assignments` - assignment lifecycle with replace-on-write values
//!
//! Every operation passes the capability gate before touching storage.

use std::sync::Arc;

use product_specifications_sdk::SecurityContext;
use tracing::warn;

use super::error::DomainError;
use super::fields::EDIT_PRODUCT_CAPABILITY;
use super::ports::{CapabilityGate, LocaleProvider};
use super::repo::{
    AssignmentsRepository, ProductsRepository, SpecificationsRepository, ValueWriteOptions,
};
use super::validator::AssignmentValidator;

mod assignments;
mod catalog;
mod search;

pub use assignments::AssignmentsService;
pub use catalog::SpecificationCatalog;
pub use search::CatalogSearch;

/// Configuration for the domain services
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceConfig {
    /// Scalar path: delete the locale's translation when the summary is empty.
    pub clear_translation_on_empty_summary: bool,
}

impl ServiceConfig {
    #[must_use]
    pub fn value_write_options(self) -> ValueWriteOptions {
        ValueWriteOptions {
            clear_translation_on_empty_summary: self.clear_translation_on_empty_summary,
        }
    }
}

async fn authorize(gate: &dyn CapabilityGate, ctx: &SecurityContext) -> Result<(), DomainError> {
    if gate.is_granted(ctx, EDIT_PRODUCT_CAPABILITY).await {
        return Ok(());
    }
    warn!(
        subject_id = %ctx.subject_id(),
        capability = EDIT_PRODUCT_CAPABILITY,
        "capability check failed"
    );
    Err(DomainError::forbidden(EDIT_PRODUCT_CAPABILITY))
}

// DI container - aggregates all domain services
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<SpecificationCatalog>,
    pub search: Arc<CatalogSearch>,
    pub assignments: Arc<AssignmentsService>,
    pub locales: Arc<dyn LocaleProvider>,
}

impl AppServices {
    pub fn new(
        specifications: Arc<dyn SpecificationsRepository>,
        products: Arc<dyn ProductsRepository>,
        assignments: Arc<dyn AssignmentsRepository>,
        gate: Arc<dyn CapabilityGate>,
        locales: Arc<dyn LocaleProvider>,
        config: ServiceConfig,
    ) -> Self {
        let validator = AssignmentValidator::new(Arc::clone(&specifications), Arc::clone(&locales));

        Self {
            catalog: Arc::new(SpecificationCatalog::new(
                Arc::clone(&specifications),
                Arc::clone(&gate),
            )),
            search: Arc::new(CatalogSearch::new(
                specifications,
                Arc::clone(&gate),
                Arc::clone(&locales),
            )),
            locales,
            assignments: Arc::new(AssignmentsService::new(
                assignments,
                products,
                validator,
                gate,
                config,
            )),
        }
    }
}
