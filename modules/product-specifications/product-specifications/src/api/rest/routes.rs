use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use super::{dto, handlers, problem};
use crate::domain::service::AppServices;

pub const BASE_PATH: &str = "/product-specifications/v1";

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Specifications API"),
    paths(
        handlers::get_specification,
        handlers::search_specifications,
        handlers::list_category_specifications,
        handlers::create_assignment,
        handlers::get_assignment,
        handlers::update_assignment,
        handlers::delete_assignment,
    ),
    components(schemas(
        dto::AssignmentRequest,
        dto::IdInput,
        dto::TextInput,
        dto::MultiValuesInput,
        dto::ToggleInput,
        dto::AssignmentDto,
        dto::AssignmentEnvelope,
        dto::TranslationDto,
        dto::SpecificationDto,
        dto::MultiValueOptionDto,
        dto::SpecificationDetailsDto,
        dto::SpecificationHitDto,
        dto::CategorySpecificationsDto,
        problem::Problem,
        problem::ValidationViolation,
    )),
    tags(
        (name = "specifications", description = "Specification catalog lookup and search"),
        (name = "assignments", description = "Specification assignments of products")
    )
)]
pub struct ApiDoc;

/// Routes of the module without state; callers add the `AppServices`
/// extension and the authentication layer.
pub fn api_router() -> Router {
    let api = Router::new()
        .route("/specifications/search", get(handlers::search_specifications))
        .route("/specifications/{id}", get(handlers::get_specification))
        .route(
            "/categories/{category_id}/specifications",
            get(handlers::list_category_specifications),
        )
        .route("/assignments", post(handlers::create_assignment))
        .route(
            "/assignments/{id}",
            get(handlers::get_assignment)
                .put(handlers::update_assignment)
                .delete(handlers::delete_assignment),
        );

    Router::new().nest(BASE_PATH, api)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full module router: API routes bound to `services`, plus `/openapi.json`.
pub fn router(services: AppServices) -> Router {
    api_router()
        .layer(Extension(services))
        .route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_operation() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/product-specifications/v1/assignments"));
        assert!(paths.contains(&"/product-specifications/v1/assignments/{id}"));
        assert!(paths.contains(&"/product-specifications/v1/specifications/search"));
        assert!(
            paths.contains(&"/product-specifications/v1/categories/{category_id}/specifications")
        );
        assert_eq!(doc.paths.paths.len(), 5);
    }
}
