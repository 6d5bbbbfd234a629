//! Collaborator interfaces consumed by the domain.

use async_trait::async_trait;
use product_specifications_sdk::SecurityContext;

/// Capability check gate in front of every operation.
#[async_trait]
pub trait CapabilityGate: Send + Sync {
    async fn is_granted(&self, ctx: &SecurityContext, capability: &str) -> bool;
}

/// Source of the deployment's default locale.
pub trait LocaleProvider: Send + Sync {
    fn default_locale(&self) -> String;
}
