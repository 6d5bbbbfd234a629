#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{link_rows, multi_value_draft, setup, setup_with, text_draft, translation_rows};
use product_specifications::infra::storage::entity::assignment;
use product_specifications::{AssignmentDraft, ProductSpecificationsError};
use product_specifications_sdk::{AssignmentStatus, AssignmentValues, InputType, Translation};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

#[tokio::test]
async fn multi_value_create_then_update_replaces_links() {
    let app = setup().await;

    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10, 11]))
        .await
        .unwrap();
    assert_eq!(link_rows(&app.db, created.id).await, vec![10, 11]);
    assert!(translation_rows(&app.db, created.id).await.is_empty());
    assert_eq!(created.creator_id, 42);
    assert_eq!(created.order, None);

    let updated = app
        .client
        .update_assignment(&app.admin, created.id, multi_value_draft(5, &[12]))
        .await
        .unwrap();
    assert_eq!(link_rows(&app.db, created.id).await, vec![12]);
    assert_eq!(updated.values, AssignmentValues::MultiValue(vec![12]));
}

#[tokio::test]
async fn multi_value_links_keep_duplicates() {
    let app = setup().await;

    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10, 10, 11]))
        .await
        .unwrap();

    assert_eq!(link_rows(&app.db, created.id).await, vec![10, 10, 11]);
}

#[tokio::test]
async fn multi_value_option_ids_are_not_checked_against_catalog() {
    let app = setup().await;

    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[999]))
        .await
        .unwrap();

    assert_eq!(link_rows(&app.db, created.id).await, vec![999]);
}

#[tokio::test]
async fn repeating_an_update_is_idempotent() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10]))
        .await
        .unwrap();

    for _ in 0..2 {
        app.client
            .update_assignment(&app.admin, created.id, multi_value_draft(5, &[11, 12]))
            .await
            .unwrap();
    }

    assert_eq!(link_rows(&app.db, created.id).await, vec![11, 12]);
}

#[tokio::test]
async fn textarea_summary_is_upserted_per_lower_cased_locale() {
    let app = setup().await;

    let created = app
        .client
        .create_assignment(&app.admin, text_draft("textarea", "Hand wash", "EN"))
        .await
        .unwrap();
    assert_eq!(
        translation_rows(&app.db, created.id).await,
        vec![("en".to_owned(), "Hand wash".to_owned())]
    );
    assert_eq!(created.status, AssignmentStatus::Active);

    app.client
        .update_assignment(&app.admin, created.id, text_draft("textarea", "Dry clean", "en"))
        .await
        .unwrap();
    app.client
        .update_assignment(&app.admin, created.id, text_draft("textarea", "Chemisch", "de"))
        .await
        .unwrap();

    assert_eq!(
        translation_rows(&app.db, created.id).await,
        vec![
            ("en".to_owned(), "Dry clean".to_owned()),
            ("de".to_owned(), "Chemisch".to_owned()),
        ]
    );
}

#[tokio::test]
async fn switching_input_type_drops_values_of_the_old_shape() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10, 11]))
        .await
        .unwrap();

    let updated = app
        .client
        .update_assignment(&app.admin, created.id, text_draft("textarea", "Cotton", "en"))
        .await
        .unwrap();

    assert_eq!(updated.input_type, InputType::Textarea);
    assert!(link_rows(&app.db, created.id).await.is_empty());
    assert_eq!(
        updated.values,
        AssignmentValues::Translated(vec![Translation {
            locale: "en".to_owned(),
            text: "Cotton".to_owned(),
        }])
    );

    app.client
        .update_assignment(&app.admin, created.id, multi_value_draft(5, &[12]))
        .await
        .unwrap();
    assert!(translation_rows(&app.db, created.id).await.is_empty());
}

#[tokio::test]
async fn update_never_changes_specification_and_resets_timestamp() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, text_draft("single_value", "Wool", "en"))
        .await
        .unwrap();

    let mut draft = text_draft("single_value", "Linen", "en");
    draft.specification_id = Some("1".to_owned());
    draft.allow_selection = Some("on".to_owned());
    draft.status = None;
    let updated = app
        .client
        .update_assignment(&app.admin, created.id, draft)
        .await
        .unwrap();

    assert_eq!(updated.specification_id, 4);
    assert!(updated.allow_selection);
    assert_eq!(updated.status, AssignmentStatus::Inactive);
    assert!(updated.created_at >= created.created_at);
}

#[tokio::test]
async fn single_value_empty_summary_keeps_translation() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, text_draft("single_value", "Wool", "en"))
        .await
        .unwrap();

    app.client
        .update_assignment(&app.admin, created.id, text_draft("single_value", "", "en"))
        .await
        .unwrap();

    assert_eq!(
        translation_rows(&app.db, created.id).await,
        vec![("en".to_owned(), "Wool".to_owned())]
    );
}

#[tokio::test]
async fn single_value_empty_summary_clears_translation_when_configured() {
    let app = setup_with(|cfg| cfg.clear_translation_on_empty_summary = true).await;
    let created = app
        .client
        .create_assignment(&app.admin, text_draft("single_value", "Wool", "en"))
        .await
        .unwrap();

    app.client
        .update_assignment(&app.admin, created.id, text_draft("single_value", " ", "en"))
        .await
        .unwrap();

    assert!(translation_rows(&app.db, created.id).await.is_empty());
}

#[tokio::test]
async fn unknown_input_type_writes_nothing() {
    let app = setup().await;
    let mut draft = multi_value_draft(5, &[10]);
    draft.input_type = Some("color_swatch".to_owned());

    let err = app
        .client
        .create_assignment(&app.admin, draft)
        .await
        .unwrap_err();

    let ProductSpecificationsError::Validation { violations } = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(violations[0].field, "input_type");
    assert_eq!(assignment::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_specification_is_a_validation_error() {
    let app = setup().await;
    let draft = AssignmentDraft {
        product_id: Some("5".to_owned()),
        input_type: Some("single_value".to_owned()),
        specification_id: Some("404".to_owned()),
        ..AssignmentDraft::default()
    };

    let err = app
        .client
        .create_assignment(&app.admin, draft)
        .await
        .unwrap_err();

    assert!(matches!(err, ProductSpecificationsError::Validation { .. }));
}

#[tokio::test]
async fn unknown_product_is_not_found_for_create_and_update() {
    let app = setup().await;

    let err = app
        .client
        .create_assignment(&app.admin, multi_value_draft(77, &[10]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProductSpecificationsError::NotFound {
            resource: "Product",
            id: 77
        }
    ));

    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10]))
        .await
        .unwrap();
    let err = app
        .client
        .update_assignment(&app.admin, created.id, multi_value_draft(77, &[11]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProductSpecificationsError::NotFound {
            resource: "Product",
            ..
        }
    ));
}

#[tokio::test]
async fn update_through_another_product_is_not_found_and_writes_nothing() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10]))
        .await
        .unwrap();

    let err = app
        .client
        .update_assignment(&app.admin, created.id, multi_value_draft(6, &[11]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProductSpecificationsError::NotFound {
            resource: "Assignment",
            ..
        }
    ));
    assert_eq!(link_rows(&app.db, created.id).await, vec![10]);
}

#[tokio::test]
async fn delete_removes_values_and_unknown_delete_is_noop() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10, 11]))
        .await
        .unwrap();

    app.client
        .delete_assignment(&app.admin, created.id)
        .await
        .unwrap();
    assert!(link_rows(&app.db, created.id).await.is_empty());

    app.client
        .delete_assignment(&app.admin, created.id)
        .await
        .unwrap();
    let err = app
        .client
        .get_assignment(&app.admin, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ProductSpecificationsError::NotFound { .. }));
}

#[tokio::test]
async fn caller_without_capability_changes_nothing() {
    let app = setup().await;
    let stranger = product_specifications::SecurityContext::builder()
        .subject_id(uuid::Uuid::new_v4())
        .build();

    let err = app
        .client
        .create_assignment(&stranger, multi_value_draft(5, &[10]))
        .await
        .unwrap_err();

    assert!(matches!(err, ProductSpecificationsError::Forbidden { .. }));
    assert_eq!(assignment::Entity::find().count(&app.db).await.unwrap(), 0);
}

async fn drop_link_table(app: &common::TestApp) {
    app.db
        .execute_unprepared("DROP TABLE product_selected_specification_multi_values")
        .await
        .unwrap();
}

#[tokio::test]
async fn failed_value_write_rolls_back_create() {
    let app = setup().await;
    drop_link_table(&app).await;

    let err = app
        .client
        .create_assignment(&app.admin, multi_value_draft(5, &[10, 11]))
        .await
        .unwrap_err();

    assert!(matches!(err, ProductSpecificationsError::Internal));
    assert_eq!(assignment::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn failed_value_write_rolls_back_update() {
    let app = setup().await;
    let created = app
        .client
        .create_assignment(&app.admin, text_draft("textarea", "Hand wash", "en"))
        .await
        .unwrap();
    drop_link_table(&app).await;

    let mut draft = text_draft("textarea", "Dry clean only", "en");
    draft.status = None;
    let err = app
        .client
        .update_assignment(&app.admin, created.id, draft)
        .await
        .unwrap_err();

    assert!(matches!(err, ProductSpecificationsError::Internal));
    let row = assignment::Entity::find_by_id(created.id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "active");
    assert_eq!(row.created_at, created.created_at);
    assert_eq!(
        translation_rows(&app.db, created.id).await,
        vec![("en".to_owned(), "Hand wash".to_owned())]
    );
}
