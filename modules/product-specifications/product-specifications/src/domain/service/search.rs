use std::sync::Arc;

use product_specifications_sdk::{CategorySpecifications, SecurityContext, SpecificationHit};
use tracing::{debug, instrument};

use super::authorize;
use super::catalog::SpecificationCatalog;
use crate::domain::error::DomainError;
use crate::domain::ports::{CapabilityGate, LocaleProvider};
use crate::domain::repo::SpecificationsRepository;

/// Category-scoped, locale-aware reads over the specification catalog.
pub struct CatalogSearch {
    repo: Arc<dyn SpecificationsRepository>,
    gate: Arc<dyn CapabilityGate>,
    locales: Arc<dyn LocaleProvider>,
}

impl CatalogSearch {
    pub fn new(
        repo: Arc<dyn SpecificationsRepository>,
        gate: Arc<dyn CapabilityGate>,
        locales: Arc<dyn LocaleProvider>,
    ) -> Self {
        Self {
            repo,
            gate,
            locales,
        }
    }

    fn default_locale(&self) -> String {
        self.locales.default_locale().to_lowercase()
    }

    /// Specifications of the category whose title, in any locale, contains
    /// `term` (case-sensitive). An empty term or a missing category matches
    /// nothing.
    ///
    /// Hits carry the title in `locale`, falling back to the default locale.
    #[instrument(skip(self, ctx))]
    pub async fn search(
        &self,
        ctx: &SecurityContext,
        term: &str,
        category_id: Option<i64>,
        locale: Option<&str>,
    ) -> Result<Vec<SpecificationHit>, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;

        let Some(category_id) = category_id.filter(|_| !term.is_empty()) else {
            return Ok(Vec::new());
        };

        let fallback = self.default_locale();
        let locale = locale.map_or_else(|| fallback.clone(), str::to_lowercase);

        let hits: Vec<SpecificationHit> =
            SpecificationCatalog::linked_specifications(self.repo.as_ref(), category_id)
                .await?
                .into_iter()
                .filter(|s| s.titles.iter().any(|t| t.text.contains(term)))
                .map(|s| SpecificationHit {
                    id: s.id,
                    title: s.title(&locale, &fallback).map(str::to_owned),
                })
                .collect();

        debug!(hits = hits.len(), "specification search finished");
        Ok(hits)
    }

    /// Every specification linked to the category, with the default locale.
    #[instrument(skip(self, ctx), fields(category.id = category_id))]
    pub async fn list_for_category(
        &self,
        ctx: &SecurityContext,
        category_id: i64,
    ) -> Result<CategorySpecifications, DomainError> {
        authorize(self.gate.as_ref(), ctx).await?;

        let specifications =
            SpecificationCatalog::linked_specifications(self.repo.as_ref(), category_id).await?;

        Ok(CategorySpecifications {
            specifications,
            default_locale: self.default_locale(),
        })
    }
}
