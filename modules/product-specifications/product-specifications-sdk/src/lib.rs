//! Product specifications SDK
//!
//! Contract of the product-specifications module:
//! - `ProductSpecificationsApi` - trait for inter-module communication
//! - `Assignment`, `AssignmentDraft`, `Specification`, ... - data models
//! - `ProductSpecificationsError` - error types
//! - `SecurityContext` - caller identity passed to every call

pub mod api;
pub mod errors;
pub mod models;
pub mod security;

pub use api::ProductSpecificationsApi;
pub use errors::{FieldViolation, ProductSpecificationsError};
pub use models::{
    Assignment, AssignmentDraft, AssignmentStatus, AssignmentValue, AssignmentValues,
    CategorySpecifications, InputType, MultiValueOption, NewAssignment, Product, Specification,
    SpecificationDetails, SpecificationHit, Translation, UnknownInputType,
};
pub use security::SecurityContext;
