use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query};
use axum::http::{StatusCode, Uri};

use super::authz::Authz;
use super::dto::{
    AssignmentDto, AssignmentEnvelope, AssignmentRequest, CategorySpecificationsDto, LocaleQuery,
    SearchQuery, SpecificationDetailsDto, SpecificationHitDto,
};
use super::error::{domain_error_to_problem, json_rejection_to_problem};
use super::problem::{ApiResult, Problem};
use crate::domain::error::DomainError;
use crate::domain::service::AppServices;

fn problem_at(uri: &Uri) -> impl FnOnce(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

fn assignment_body(
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
    uri: &Uri,
) -> ApiResult<AssignmentRequest> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| json_rejection_to_problem(&rejection, uri.path()))
}

/// Get a specification with its multi-value options.
#[utoipa::path(
    get,
    path = "/product-specifications/v1/specifications/{id}",
    params(("id" = i64, Path, description = "Specification id"), LocaleQuery),
    responses(
        (status = 200, description = "Specification found", body = SpecificationDetailsDto),
        (status = 403, description = "Missing capability", body = Problem),
        (status = 404, description = "Specification not found", body = Problem)
    ),
    tag = "specifications"
)]
#[tracing::instrument(skip(svc, ctx, uri))]
pub async fn get_specification(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Path(id): Path<i64>,
    Query(query): Query<LocaleQuery>,
    uri: Uri,
) -> ApiResult<Json<SpecificationDetailsDto>> {
    let details = svc
        .catalog
        .get_by_id(&ctx, id)
        .await
        .map_err(problem_at(&uri))?;

    let fallback = svc.locales.default_locale().to_lowercase();
    let locale = query
        .locale
        .map_or_else(|| fallback.clone(), |l| l.to_lowercase());
    Ok(Json(SpecificationDetailsDto::project(
        details, &locale, &fallback,
    )))
}

/// Create a specification assignment.
#[utoipa::path(
    post,
    path = "/product-specifications/v1/assignments",
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignment created", body = AssignmentEnvelope),
        (status = 403, description = "Missing capability", body = Problem),
        (status = 400, description = "Malformed JSON body", body = Problem),
        (status = 404, description = "Product not found", body = Problem),
        (status = 422, description = "Validation failed", body = Problem)
    ),
    tag = "assignments"
)]
#[tracing::instrument(skip(svc, ctx, uri, payload))]
pub async fn create_assignment(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    uri: Uri,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> ApiResult<Json<AssignmentEnvelope>> {
    let req = assignment_body(payload, &uri)?;
    let created = svc
        .assignments
        .create(&ctx, req.into())
        .await
        .map_err(problem_at(&uri))?;
    Ok(Json(AssignmentEnvelope::ok(created)))
}

/// Update a specification assignment and replace its values.
#[utoipa::path(
    put,
    path = "/product-specifications/v1/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment id")),
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentEnvelope),
        (status = 403, description = "Missing capability", body = Problem),
        (status = 400, description = "Malformed JSON body", body = Problem),
        (status = 404, description = "Product or assignment not found", body = Problem),
        (status = 422, description = "Validation failed", body = Problem)
    ),
    tag = "assignments"
)]
#[tracing::instrument(skip(svc, ctx, uri, payload))]
pub async fn update_assignment(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Path(id): Path<i64>,
    uri: Uri,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> ApiResult<Json<AssignmentEnvelope>> {
    let req = assignment_body(payload, &uri)?;
    let updated = svc
        .assignments
        .update(&ctx, id, req.into())
        .await
        .map_err(problem_at(&uri))?;
    Ok(Json(AssignmentEnvelope::ok(updated)))
}

/// Delete a specification assignment; unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/product-specifications/v1/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment id")),
    responses(
        (status = 204, description = "Assignment deleted or absent"),
        (status = 403, description = "Missing capability", body = Problem)
    ),
    tag = "assignments"
)]
#[tracing::instrument(skip(svc, ctx, uri))]
pub async fn delete_assignment(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Path(id): Path<i64>,
    uri: Uri,
) -> ApiResult<StatusCode> {
    svc.assignments
        .delete(&ctx, id)
        .await
        .map_err(problem_at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a specification assignment with its values.
#[utoipa::path(
    get,
    path = "/product-specifications/v1/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment id")),
    responses(
        (status = 200, description = "Assignment found", body = AssignmentDto),
        (status = 403, description = "Missing capability", body = Problem),
        (status = 404, description = "Assignment not found", body = Problem)
    ),
    tag = "assignments"
)]
#[tracing::instrument(skip(svc, ctx, uri))]
pub async fn get_assignment(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Path(id): Path<i64>,
    uri: Uri,
) -> ApiResult<Json<AssignmentDto>> {
    let assignment = svc
        .assignments
        .get(&ctx, id)
        .await
        .map_err(problem_at(&uri))?;
    Ok(Json(assignment.into()))
}

/// Search a category's specifications by title.
#[utoipa::path(
    get,
    path = "/product-specifications/v1/specifications/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching specifications", body = [SpecificationHitDto]),
        (status = 403, description = "Missing capability", body = Problem)
    ),
    tag = "specifications"
)]
#[tracing::instrument(skip(svc, ctx, uri))]
pub async fn search_specifications(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Query(query): Query<SearchQuery>,
    uri: Uri,
) -> ApiResult<Json<Vec<SpecificationHitDto>>> {
    let hits = svc
        .search
        .search(&ctx, &query.term, query.category_id, query.locale.as_deref())
        .await
        .map_err(problem_at(&uri))?;
    Ok(Json(hits.into_iter().map(Into::into).collect()))
}

/// List every specification linked to a category.
#[utoipa::path(
    get,
    path = "/product-specifications/v1/categories/{category_id}/specifications",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Linked specifications", body = CategorySpecificationsDto),
        (status = 403, description = "Missing capability", body = Problem)
    ),
    tag = "specifications"
)]
#[tracing::instrument(skip(svc, ctx, uri))]
pub async fn list_category_specifications(
    Authz(ctx): Authz,
    Extension(svc): Extension<AppServices>,
    Path(category_id): Path<i64>,
    uri: Uri,
) -> ApiResult<Json<CategorySpecificationsDto>> {
    let listed = svc
        .search
        .list_for_category(&ctx, category_id)
        .await
        .map_err(problem_at(&uri))?;
    Ok(Json(listed.into()))
}
