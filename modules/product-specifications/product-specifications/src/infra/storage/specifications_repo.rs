use std::collections::HashMap;

use async_trait::async_trait;
use product_specifications_sdk::{MultiValueOption, Specification};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use super::entity::{
    category_link, multi_value, multi_value_translation, specification,
    specification_translation,
};
use super::mapper::{multi_value_from_rows, specification_from_rows};
use crate::domain::repo::SpecificationsRepository;

/// Read-only `SeaORM` access to the specification catalog.
pub struct SeaOrmSpecificationsRepository {
    db: DatabaseConnection,
}

impl SeaOrmSpecificationsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn titles_for(
        &self,
        ids: &[i64],
    ) -> anyhow::Result<HashMap<i64, Vec<specification_translation::Model>>> {
        let rows = specification_translation::Entity::find()
            .filter(specification_translation::Column::ProductSpecificationId.is_in(ids.to_vec()))
            .order_by_asc(specification_translation::Column::Id)
            .all(&self.db)
            .await?;

        let mut grouped: HashMap<i64, Vec<_>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.product_specification_id)
                .or_default()
                .push(row);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl SpecificationsRepository for SeaOrmSpecificationsRepository {
    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Specification>> {
        let Some(model) = specification::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let titles = self.titles_for(&[id]).await?.remove(&id).unwrap_or_default();
        specification_from_rows(model, titles).map(Some)
    }

    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        Ok(specification::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .is_some())
    }

    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn multi_values(&self, specification_id: i64) -> anyhow::Result<Vec<MultiValueOption>> {
        let options = multi_value::Entity::find()
            .filter(multi_value::Column::SpecificationId.eq(specification_id))
            .order_by_asc(multi_value::Column::Id)
            .all(&self.db)
            .await?;
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = options.iter().map(|o| o.id).collect();
        let mut titles: HashMap<i64, Vec<_>> = HashMap::new();
        for row in multi_value_translation::Entity::find()
            .filter(multi_value_translation::Column::ProductSpecificationMultiValueId.is_in(ids))
            .order_by_asc(multi_value_translation::Column::Id)
            .all(&self.db)
            .await?
        {
            titles
                .entry(row.product_specification_multi_value_id)
                .or_default()
                .push(row);
        }

        Ok(options
            .into_iter()
            .map(|o| {
                let rows = titles.remove(&o.id).unwrap_or_default();
                multi_value_from_rows(o, rows)
            })
            .collect())
    }

    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn ids_for_category(&self, category_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut ids: Vec<i64> = category_link::Entity::find()
            .filter(category_link::Column::CategoryId.eq(category_id))
            .order_by_asc(category_link::Column::SpecificationId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|l| l.specification_id)
            .collect();
        ids.dedup();
        Ok(ids)
    }

    #[instrument(skip(self, ids), fields(db.operation = "select", count = ids.len()))]
    async fn list_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Specification>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = specification::Entity::find()
            .filter(specification::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(specification::Column::Id)
            .all(&self.db)
            .await?;
        let mut titles = self.titles_for(ids).await?;

        models
            .into_iter()
            .map(|m| {
                let rows = titles.remove(&m.id).unwrap_or_default();
                specification_from_rows(m, rows)
            })
            .collect()
    }
}
