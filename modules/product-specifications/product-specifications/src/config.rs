//! Configuration for the product-specifications module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::service::ServiceConfig;

/// Module configuration, read from `modules.product_specifications`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductSpecificationsConfig {
    /// Locale used when a submission or read names none.
    pub default_locale: String,

    /// Delete the stored translation for the locale when a `single_value`
    /// submission carries an empty summary.
    pub clear_translation_on_empty_summary: bool,

    /// Static capability grants.
    pub grants: Vec<CapabilityGrant>,
}

impl Default for ProductSpecificationsConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            clear_translation_on_empty_summary: false,
            grants: Vec::new(),
        }
    }
}

impl ProductSpecificationsConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            clear_translation_on_empty_summary: self.clear_translation_on_empty_summary,
        }
    }
}

/// Capabilities granted to one subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityGrant {
    pub subject_id: Uuid,
    pub capabilities: Vec<String>,
}
