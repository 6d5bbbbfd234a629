//! Error types for the product-specifications SDK.

use thiserror::Error;

/// One failing field of a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ProductSpecificationsError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Validation failed for {} field(s)", .violations.len())]
    Validation { violations: Vec<FieldViolation> },

    #[error("Missing capability '{capability}'")]
    Forbidden { capability: String },

    #[error("Internal error")]
    Internal,
}

impl ProductSpecificationsError {
    #[must_use]
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    #[must_use]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    #[must_use]
    pub fn forbidden(capability: impl Into<String>) -> Self {
        Self::Forbidden {
            capability: capability.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
