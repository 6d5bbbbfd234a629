#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities: an in-memory SQLite database with the schema
//! applied and a small seeded catalog.
//!
//! Catalog:
//! - products 5 (creator 42) and 6 (creator 43)
//! - specification 1 `single_value` "Material" / "Stoff"
//! - specification 3 `multi_value` "Color" / "Farbe", options 10, 11, 12
//! - specification 4 `textarea` "Care instructions"
//! - specification 9 `single_value` "Colorfastness"
//! - category 7 links 1, 3, 4; category 8 links 9

use std::sync::Arc;

use product_specifications::infra::storage::entity::{
    assignment_multi_value, assignment_translation, category_link, multi_value,
    multi_value_translation, product, specification, specification_translation,
};
use product_specifications::{
    AssignmentDraft, CapabilityGrant, ProductSpecificationsApi, ProductSpecificationsConfig,
    ProductSpecificationsModule, SecurityContext,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct TestApp {
    pub db: DatabaseConnection,
    pub module: ProductSpecificationsModule,
    pub client: Arc<dyn ProductSpecificationsApi>,
    pub admin: SecurityContext,
}

pub async fn connect() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("connect sqlite");
    ProductSpecificationsModule::migrate(&db)
        .await
        .expect("apply migrations");
    seed(&db).await;
    db
}

pub async fn setup() -> TestApp {
    setup_with(|_| {}).await
}

pub async fn setup_with(tweak: impl FnOnce(&mut ProductSpecificationsConfig)) -> TestApp {
    let db = connect().await;
    let admin = SecurityContext::builder()
        .subject_id(Uuid::new_v4())
        .tenant_id(Uuid::new_v4())
        .build();

    let mut config = ProductSpecificationsConfig {
        default_locale: "EN".to_owned(),
        grants: vec![CapabilityGrant {
            subject_id: admin.subject_id(),
            capabilities: vec!["admin_store_edit_product".to_owned()],
        }],
        ..ProductSpecificationsConfig::default()
    };
    tweak(&mut config);

    let module = ProductSpecificationsModule::new(&db, &config);
    let client = module.client();
    TestApp {
        db,
        module,
        client,
        admin,
    }
}

async fn seed(db: &DatabaseConnection) {
    for (id, creator_id) in [(5, 42), (6, 43)] {
        product::ActiveModel {
            id: ActiveValue::Set(id),
            creator_id: ActiveValue::Set(creator_id),
        }
        .insert(db)
        .await
        .unwrap();
    }

    let specs: [(i64, &str, &[(&str, &str)]); 4] = [
        (1, "single_value", &[("en", "Material"), ("de", "Stoff")]),
        (3, "multi_value", &[("en", "Color"), ("de", "Farbe")]),
        (4, "textarea", &[("en", "Care instructions")]),
        (9, "single_value", &[("en", "Colorfastness")]),
    ];
    for (id, input_type, titles) in specs {
        specification::ActiveModel {
            id: ActiveValue::Set(id),
            input_type: ActiveValue::Set(input_type.to_owned()),
        }
        .insert(db)
        .await
        .unwrap();
        for (locale, title) in titles {
            specification_translation::ActiveModel {
                id: ActiveValue::NotSet,
                product_specification_id: ActiveValue::Set(id),
                locale: ActiveValue::Set((*locale).to_owned()),
                title: ActiveValue::Set((*title).to_owned()),
            }
            .insert(db)
            .await
            .unwrap();
        }
    }

    for (id, title) in [(10, "Red"), (11, "Blue"), (12, "Green")] {
        multi_value::ActiveModel {
            id: ActiveValue::Set(id),
            specification_id: ActiveValue::Set(3),
        }
        .insert(db)
        .await
        .unwrap();
        multi_value_translation::ActiveModel {
            id: ActiveValue::NotSet,
            product_specification_multi_value_id: ActiveValue::Set(id),
            locale: ActiveValue::Set("en".to_owned()),
            title: ActiveValue::Set(title.to_owned()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    for (category_id, specification_id) in [(7, 1), (7, 3), (7, 4), (8, 9)] {
        category_link::ActiveModel {
            id: ActiveValue::NotSet,
            specification_id: ActiveValue::Set(specification_id),
            category_id: ActiveValue::Set(category_id),
        }
        .insert(db)
        .await
        .unwrap();
    }
}

/// Option ids linked to an assignment, in insertion order.
pub async fn link_rows(db: &DatabaseConnection, assignment_id: i64) -> Vec<i64> {
    assignment_multi_value::Entity::find()
        .filter(assignment_multi_value::Column::SelectedSpecificationId.eq(assignment_id))
        .order_by_asc(assignment_multi_value::Column::Id)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.specification_multi_value_id)
        .collect()
}

/// (locale, value) translation rows of an assignment.
pub async fn translation_rows(
    db: &DatabaseConnection,
    assignment_id: i64,
) -> Vec<(String, String)> {
    assignment_translation::Entity::find()
        .filter(assignment_translation::Column::ProductSelectedSpecificationId.eq(assignment_id))
        .order_by_asc(assignment_translation::Column::Id)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|t| (t.locale, t.value))
        .collect()
}

pub fn multi_value_draft(product_id: i64, ids: &[i64]) -> AssignmentDraft {
    AssignmentDraft {
        product_id: Some(product_id.to_string()),
        input_type: Some("multi_value".to_owned()),
        specification_id: Some("3".to_owned()),
        multi_values: ids.iter().map(ToString::to_string).collect(),
        ..AssignmentDraft::default()
    }
}

pub fn text_draft(input_type: &str, summary: &str, locale: &str) -> AssignmentDraft {
    AssignmentDraft {
        product_id: Some("5".to_owned()),
        input_type: Some(input_type.to_owned()),
        specification_id: Some("4".to_owned()),
        summary: Some(summary.to_owned()),
        locale: Some(locale.to_owned()),
        status: Some("on".to_owned()),
        ..AssignmentDraft::default()
    }
}
