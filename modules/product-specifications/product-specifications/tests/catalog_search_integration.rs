#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::setup;
use product_specifications::ProductSpecificationsError;
use product_specifications_sdk::InputType;

#[tokio::test]
async fn empty_term_matches_nothing_in_any_category() {
    let app = setup().await;

    for category_id in [7, 8, 12345] {
        let hits = app
            .client
            .search_specifications(&app.admin, "", category_id, None)
            .await
            .unwrap();
        assert!(hits.is_empty(), "category {category_id}");
    }
}

#[tokio::test]
async fn search_is_scoped_to_the_category() {
    let app = setup().await;

    let hits = app
        .client
        .search_specifications(&app.admin, "Color", 7, None)
        .await
        .unwrap();
    let ids: Vec<i64> = hits.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(hits[0].title.as_deref(), Some("Color"));

    let hits = app
        .client
        .search_specifications(&app.admin, "Color", 8, None)
        .await
        .unwrap();
    assert_eq!(hits.iter().map(|h| h.id).collect::<Vec<_>>(), vec![9]);
}

#[tokio::test]
async fn search_is_case_sensitive() {
    let app = setup().await;

    let hits = app
        .client
        .search_specifications(&app.admin, "color", 7, None)
        .await
        .unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn search_matches_translated_titles_and_projects_locale() {
    let app = setup().await;

    let hits = app
        .client
        .search_specifications(&app.admin, "Farb", 7, None)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title.as_deref(), Some("Color"));

    let hits = app
        .client
        .search_specifications(&app.admin, "Farb", 7, Some("de"))
        .await
        .unwrap();
    assert_eq!(hits[0].title.as_deref(), Some("Farbe"));
}

#[tokio::test]
async fn category_listing_is_ordered_with_lower_cased_default_locale() {
    let app = setup().await;

    let listed = app
        .client
        .list_category_specifications(&app.admin, 7)
        .await
        .unwrap();

    assert_eq!(listed.default_locale, "en");
    let ids: Vec<i64> = listed.specifications.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(listed.specifications[2].input_type, InputType::Textarea);

    let empty = app
        .client
        .list_category_specifications(&app.admin, 999)
        .await
        .unwrap();
    assert!(empty.specifications.is_empty());
}

#[tokio::test]
async fn get_specification_loads_options_for_multi_value_only() {
    let app = setup().await;

    let color = app.client.get_specification(&app.admin, 3).await.unwrap();
    let options: Vec<i64> = color.multi_values.iter().map(|o| o.id).collect();
    assert_eq!(options, vec![10, 11, 12]);
    assert_eq!(color.multi_values[1].title("en", "en"), Some("Blue"));

    let material = app.client.get_specification(&app.admin, 1).await.unwrap();
    assert!(material.multi_values.is_empty());
    assert_eq!(material.specification.title("de", "en"), Some("Stoff"));

    let err = app
        .client
        .get_specification(&app.admin, 99)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProductSpecificationsError::NotFound {
            resource: "Specification",
            id: 99
        }
    ));
}
