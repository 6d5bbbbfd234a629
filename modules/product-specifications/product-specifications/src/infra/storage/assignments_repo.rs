//! `SeaORM` persistence for assignments and their value rows.
//!
//! Every write runs in one transaction: the assignment row first, then the
//! value rows are replaced to match the new input type. Dropping the
//! transaction on an early return rolls everything back.

use async_trait::async_trait;
use product_specifications_sdk::{Assignment, AssignmentValue, NewAssignment};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use time::OffsetDateTime;
use tracing::{debug, instrument};

use super::entity::{assignment, assignment_multi_value, assignment_translation};
use super::mapper::assignment_from_rows;
use crate::domain::repo::{AssignmentsRepository, ValueWriteOptions};

pub struct SeaOrmAssignmentsRepository {
    db: DatabaseConnection,
}

impl SeaOrmAssignmentsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn load<C: ConnectionTrait>(conn: &C, id: i64) -> anyhow::Result<Option<Assignment>> {
    let Some(model) = assignment::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let translations = assignment_translation::Entity::find()
        .filter(assignment_translation::Column::ProductSelectedSpecificationId.eq(id))
        .order_by_asc(assignment_translation::Column::Id)
        .all(conn)
        .await?;
    let links = assignment_multi_value::Entity::find()
        .filter(assignment_multi_value::Column::SelectedSpecificationId.eq(id))
        .order_by_asc(assignment_multi_value::Column::Id)
        .all(conn)
        .await?;

    assignment_from_rows(model, translations, links).map(Some)
}

async fn delete_links<C: ConnectionTrait>(conn: &C, id: i64) -> anyhow::Result<u64> {
    let res = assignment_multi_value::Entity::delete_many()
        .filter(assignment_multi_value::Column::SelectedSpecificationId.eq(id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

async fn delete_translations<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    locale: Option<&str>,
) -> anyhow::Result<u64> {
    let mut query = assignment_translation::Entity::delete_many()
        .filter(assignment_translation::Column::ProductSelectedSpecificationId.eq(id));
    if let Some(locale) = locale {
        query = query.filter(assignment_translation::Column::Locale.eq(locale));
    }
    Ok(query.exec(conn).await?.rows_affected)
}

/// Insert or overwrite the translation keyed by (assignment, locale).
async fn upsert_translation<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    locale: &str,
    text: &str,
) -> anyhow::Result<()> {
    let row = assignment_translation::ActiveModel {
        id: ActiveValue::NotSet,
        product_selected_specification_id: ActiveValue::Set(id),
        locale: ActiveValue::Set(locale.to_owned()),
        value: ActiveValue::Set(text.to_owned()),
    };

    assignment_translation::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                assignment_translation::Column::ProductSelectedSpecificationId,
                assignment_translation::Column::Locale,
            ])
            .update_column(assignment_translation::Column::Value)
            .to_owned(),
        )
        .exec(conn)
        .await?;
    Ok(())
}

/// Replace the value rows of assignment `id` with `value`.
///
/// Rows of the other shape are always removed so that the stored values
/// match the assignment's input type.
async fn write_values<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    value: &AssignmentValue,
    opts: ValueWriteOptions,
) -> anyhow::Result<()> {
    match value {
        AssignmentValue::MultiValue { option_ids } => {
            delete_translations(conn, id, None).await?;
            delete_links(conn, id).await?;
            if option_ids.is_empty() {
                return Ok(());
            }
            let rows = option_ids
                .iter()
                .map(|option_id| assignment_multi_value::ActiveModel {
                    id: ActiveValue::NotSet,
                    selected_specification_id: ActiveValue::Set(id),
                    specification_multi_value_id: ActiveValue::Set(*option_id),
                });
            assignment_multi_value::Entity::insert_many(rows)
                .exec(conn)
                .await?;
        }
        AssignmentValue::SingleValue { locale, summary } => {
            delete_links(conn, id).await?;
            match summary {
                Some(text) => upsert_translation(conn, id, locale, text).await?,
                None if opts.clear_translation_on_empty_summary => {
                    delete_translations(conn, id, Some(locale.as_str())).await?;
                }
                None => debug!(locale = %locale, "empty summary, translation left as is"),
            }
        }
        AssignmentValue::Textarea { locale, summary } => {
            delete_links(conn, id).await?;
            upsert_translation(conn, id, locale, summary).await?;
        }
    }
    Ok(())
}

#[async_trait]
impl AssignmentsRepository for SeaOrmAssignmentsRepository {
    #[instrument(skip(self), fields(db.operation = "select"))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Assignment>> {
        load(&self.db, id).await
    }

    #[instrument(
        skip(self, new, opts),
        fields(db.operation = "insert", product.id = new.product_id)
    )]
    async fn create(
        &self,
        creator_id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Assignment> {
        let txn = self.db.begin().await?;

        let row = assignment::ActiveModel {
            id: ActiveValue::NotSet,
            creator_id: ActiveValue::Set(creator_id),
            product_id: ActiveValue::Set(new.product_id),
            product_specification_id: ActiveValue::Set(new.specification_id),
            input_type: ActiveValue::Set(new.input_type().as_str().to_owned()),
            allow_selection: ActiveValue::Set(new.allow_selection),
            order: ActiveValue::Set(None),
            status: ActiveValue::Set(new.status.as_str().to_owned()),
            created_at: ActiveValue::Set(OffsetDateTime::now_utc()),
        }
        .insert(&txn)
        .await?;

        write_values(&txn, row.id, &new.value, opts).await?;
        let created = load(&txn, row.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("assignment {} vanished after insert", row.id))?;

        txn.commit().await?;
        Ok(created)
    }

    #[instrument(
        skip(self, new, opts),
        fields(db.operation = "update", product.id = new.product_id)
    )]
    async fn update(
        &self,
        id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Option<Assignment>> {
        let txn = self.db.begin().await?;

        let existing = assignment::Entity::find_by_id(id)
            .filter(assignment::Column::ProductId.eq(new.product_id))
            .one(&txn)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut row: assignment::ActiveModel = existing.into();
        row.input_type = ActiveValue::Set(new.input_type().as_str().to_owned());
        row.allow_selection = ActiveValue::Set(new.allow_selection);
        row.status = ActiveValue::Set(new.status.as_str().to_owned());
        row.created_at = ActiveValue::Set(OffsetDateTime::now_utc());
        row.update(&txn).await?;

        write_values(&txn, id, &new.value, opts).await?;
        let updated = load(&txn, id).await?;

        txn.commit().await?;
        Ok(updated)
    }

    #[instrument(skip(self), fields(db.operation = "delete"))]
    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let txn = self.db.begin().await?;

        delete_links(&txn, id).await?;
        delete_translations(&txn, id, None).await?;
        let res = assignment::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
