/// Field names of the assignment payload, as reported in validation errors.
pub struct AssignmentFields;

impl AssignmentFields {
    pub const PRODUCT_ID: &'static str = "product_id";
    pub const INPUT_TYPE: &'static str = "input_type";
    pub const SPECIFICATION_ID: &'static str = "specification_id";
    pub const MULTI_VALUES: &'static str = "multi_values";
    pub const SUMMARY: &'static str = "summary";
}

/// Capability required by every operation of this module.
pub const EDIT_PRODUCT_CAPABILITY: &str = "admin_store_edit_product";
