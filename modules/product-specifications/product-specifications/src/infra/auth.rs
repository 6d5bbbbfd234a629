//! Capability gate backed by static grants from configuration.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use product_specifications_sdk::SecurityContext;
use uuid::Uuid;

use crate::config::CapabilityGrant;
use crate::domain::ports::CapabilityGate;

#[derive(Debug, Default)]
pub struct StaticCapabilityGate {
    grants: HashMap<Uuid, HashSet<String>>,
}

impl StaticCapabilityGate {
    #[must_use]
    pub fn from_grants(grants: &[CapabilityGrant]) -> Self {
        let mut map: HashMap<Uuid, HashSet<String>> = HashMap::new();
        for grant in grants {
            map.entry(grant.subject_id)
                .or_default()
                .extend(grant.capabilities.iter().cloned());
        }
        Self { grants: map }
    }
}

#[async_trait]
impl CapabilityGate for StaticCapabilityGate {
    async fn is_granted(&self, ctx: &SecurityContext, capability: &str) -> bool {
        if ctx.is_anonymous() {
            return false;
        }
        self.grants
            .get(&ctx.subject_id())
            .is_some_and(|caps| caps.contains(capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(subject: Uuid) -> SecurityContext {
        SecurityContext::builder().subject_id(subject).build()
    }

    #[tokio::test]
    async fn grants_are_per_subject_and_capability() {
        let editor = Uuid::new_v4();
        let gate = StaticCapabilityGate::from_grants(&[
            CapabilityGrant {
                subject_id: editor,
                capabilities: vec!["admin_store_edit_product".to_owned()],
            },
            CapabilityGrant {
                subject_id: editor,
                capabilities: vec!["admin_store_view".to_owned()],
            },
        ]);

        assert!(gate.is_granted(&ctx(editor), "admin_store_edit_product").await);
        assert!(gate.is_granted(&ctx(editor), "admin_store_view").await);
        assert!(!gate.is_granted(&ctx(Uuid::new_v4()), "admin_store_edit_product").await);
    }

    #[tokio::test]
    async fn anonymous_is_never_granted() {
        let gate = StaticCapabilityGate::from_grants(&[CapabilityGrant {
            subject_id: Uuid::nil(),
            capabilities: vec!["admin_store_edit_product".to_owned()],
        }]);

        assert!(
            !gate
                .is_granted(&SecurityContext::anonymous(), "admin_store_edit_product")
                .await
        );
    }
}
