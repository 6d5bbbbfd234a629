//! Composition root of the module.

use std::sync::Arc;

use axum::Router;
use product_specifications_sdk::ProductSpecificationsApi;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::ProductSpecificationsConfig;
use crate::domain::service::AppServices;
use crate::infra::auth::StaticCapabilityGate;
use crate::infra::locale::ConfiguredLocaleProvider;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    SeaOrmAssignmentsRepository, SeaOrmProductsRepository, SeaOrmSpecificationsRepository,
};

/// Wires repositories, collaborators and services over one database.
#[derive(Clone)]
pub struct ProductSpecificationsModule {
    services: AppServices,
}

impl ProductSpecificationsModule {
    pub fn new(db: &DatabaseConnection, config: &ProductSpecificationsConfig) -> Self {
        let services = AppServices::new(
            Arc::new(SeaOrmSpecificationsRepository::new(db.clone())),
            Arc::new(SeaOrmProductsRepository::new(db.clone())),
            Arc::new(SeaOrmAssignmentsRepository::new(db.clone())),
            Arc::new(StaticCapabilityGate::from_grants(&config.grants)),
            Arc::new(ConfiguredLocaleProvider::new(config.default_locale.clone())),
            config.service_config(),
        );
        info!(
            default_locale = %config.default_locale,
            grants = config.grants.len(),
            "product-specifications module initialized"
        );
        Self { services }
    }

    /// Apply pending schema migrations.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        Migrator::up(db, None).await?;
        info!("product-specifications migrations applied");
        Ok(())
    }

    /// REST routes with the OpenAPI document at `/openapi.json`.
    pub fn router(&self) -> Router {
        routes::router(self.services.clone())
    }

    pub fn client(&self) -> Arc<dyn ProductSpecificationsApi> {
        Arc::new(crate::local_client::ProductSpecificationsLocalClient::new(
            self.services.clone(),
        ))
    }
}
