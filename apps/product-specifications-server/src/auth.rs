//! Static bearer-token authentication.
//!
//! A request with a known token gets a [`SecurityContext`] in its
//! extensions; a request without an `Authorization` header passes through
//! unauthenticated and is rejected by the handlers. An unknown token is a 401.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use product_specifications::SecurityContext;
use product_specifications::api::rest::problem::Problem;
use tracing::debug;

use crate::config::AuthConfig;

#[derive(Clone, Default)]
pub struct AuthState {
    tokens: Arc<HashMap<String, SecurityContext>>,
}

impl AuthState {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|t| {
                let ctx = SecurityContext::builder()
                    .subject_id(t.subject_id)
                    .tenant_id(t.tenant_id)
                    .build();
                (t.token.clone(), ctx)
            })
            .collect();
        Self {
            tokens: Arc::new(tokens),
        }
    }

    fn resolve(&self, token: &str) -> Option<&SecurityContext> {
        self.tokens.get(token)
    }
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).trim().to_owned());

    let Some(token) = bearer else {
        return next.run(req).await;
    };

    let Some(ctx) = state.resolve(&token).cloned() else {
        debug!(path = %req.uri().path(), "rejected unknown bearer token");
        return Problem::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "The bearer token is not recognized.",
        )
        .with_instance(req.uri().path())
        .with_code("UNAUTHORIZED")
        .into_response();
    };

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
