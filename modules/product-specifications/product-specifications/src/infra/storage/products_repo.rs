use async_trait::async_trait;
use product_specifications_sdk::Product;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::instrument;

use super::entity::product;
use crate::domain::repo::ProductsRepository;

pub struct SeaOrmProductsRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for SeaOrmProductsRepository {
    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Product>> {
        let found = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }
}
