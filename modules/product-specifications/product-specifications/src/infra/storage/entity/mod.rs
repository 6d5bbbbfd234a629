//! SeaORM entities for the catalog tables and the assignment tables.
//!
//! Catalog tables are read-only for this module; only the
//! `product_selected_*` tables are written.

pub mod assignment;
pub mod assignment_multi_value;
pub mod assignment_translation;
pub mod category_link;
pub mod multi_value;
pub mod multi_value_translation;
pub mod product;
pub mod specification;
pub mod specification_translation;
