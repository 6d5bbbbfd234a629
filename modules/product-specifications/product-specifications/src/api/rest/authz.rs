use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use product_specifications_sdk::SecurityContext;

use super::problem::Problem;

/// Extractor for the caller's `SecurityContext`, placed in request
/// extensions by the authentication middleware.
#[derive(Debug, Clone)]
pub struct Authz(pub SecurityContext);

impl<S> FromRequestParts<S> for Authz
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .cloned()
            .map(Authz)
            .ok_or_else(|| {
                Problem::new(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Missing or invalid credentials",
                )
                .with_code("UNAUTHORIZED")
                .with_instance(parts.uri.path())
            })
    }
}
