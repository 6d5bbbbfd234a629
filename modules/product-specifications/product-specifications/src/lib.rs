//! Product Specifications Module
//!
//! Assigns catalog specifications to products: type-directed validation of
//! assignment payloads, transactional replace-on-write persistence of their
//! values, and category-scoped lookup and search over the catalog.
//!
//! The public API is defined in `product-specifications-sdk` and re-exported
//! here.

pub use product_specifications_sdk::{
    Assignment, AssignmentDraft, ProductSpecificationsApi, ProductSpecificationsError,
    SecurityContext,
};

pub mod module;
pub use module::ProductSpecificationsModule;

pub mod config;
pub use config::{CapabilityGrant, ProductSpecificationsConfig};

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
