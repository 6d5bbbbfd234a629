use product_specifications_sdk::{FieldViolation, ProductSpecificationsError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Specification not found: {id}")]
    SpecificationNotFound { id: i64 },

    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    #[error("Assignment not found: {id}")]
    AssignmentNotFound { id: i64 },

    #[error("Validation failed: {}", summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Missing capability '{capability}'")]
    Forbidden { capability: String },

    #[error("Persistence error: {0:#}")]
    Persistence(#[from] anyhow::Error),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    pub fn specification_not_found(id: i64) -> Self {
        Self::SpecificationNotFound { id }
    }

    pub fn product_not_found(id: i64) -> Self {
        Self::ProductNotFound { id }
    }

    pub fn assignment_not_found(id: i64) -> Self {
        Self::AssignmentNotFound { id }
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn forbidden(capability: impl Into<String>) -> Self {
        Self::Forbidden {
            capability: capability.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for ProductSpecificationsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::SpecificationNotFound { id } => Self::not_found("Specification", id),
            DomainError::ProductNotFound { id } => Self::not_found("Product", id),
            DomainError::AssignmentNotFound { id } => Self::not_found("Assignment", id),
            DomainError::Validation { violations } => Self::validation(violations),
            DomainError::Forbidden { capability } => Self::forbidden(capability),
            DomainError::Persistence(_) => Self::internal(),
        }
    }
}
