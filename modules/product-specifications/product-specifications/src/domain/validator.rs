//! Type-directed validation of assignment drafts.
//!
//! Every field is checked and all failures are reported together; for a
//! single field only the first failing rule produces a message.

use std::sync::Arc;

use product_specifications_sdk::{
    AssignmentDraft, AssignmentStatus, AssignmentValue, FieldViolation, InputType, NewAssignment,
};
use tracing::debug;

use super::error::DomainError;
use super::fields::AssignmentFields;
use super::ports::LocaleProvider;
use super::repo::SpecificationsRepository;

/// Value of a form toggle that means "enabled".
const TOGGLE_ON: &str = "on";

pub struct AssignmentValidator {
    specifications: Arc<dyn SpecificationsRepository>,
    locales: Arc<dyn LocaleProvider>,
}

impl AssignmentValidator {
    pub fn new(
        specifications: Arc<dyn SpecificationsRepository>,
        locales: Arc<dyn LocaleProvider>,
    ) -> Self {
        Self {
            specifications,
            locales,
        }
    }

    /// Turn a raw draft into a typed submission.
    ///
    /// # Errors
    /// `DomainError::Validation` listing every failing field, or
    /// `DomainError::Persistence` if the catalog lookup fails.
    pub async fn validate(&self, draft: AssignmentDraft) -> Result<NewAssignment, DomainError> {
        let mut violations = Vec::new();

        let product_id = required_id(
            &mut violations,
            AssignmentFields::PRODUCT_ID,
            draft.product_id.as_deref(),
        );

        let input_type = match present(draft.input_type.as_deref()) {
            None => {
                violations.push(required(AssignmentFields::INPUT_TYPE));
                None
            }
            Some(raw) => raw.parse::<InputType>().map_or_else(
                |_| {
                    violations.push(invalid_selection(AssignmentFields::INPUT_TYPE));
                    None
                },
                Some,
            ),
        };

        let mut specification_id = required_id(
            &mut violations,
            AssignmentFields::SPECIFICATION_ID,
            draft.specification_id.as_deref(),
        );
        if let Some(id) = specification_id
            && !self.specifications.exists(id).await?
        {
            violations.push(invalid_selection(AssignmentFields::SPECIFICATION_ID));
            specification_id = None;
        }

        let option_ids = match input_type {
            Some(InputType::MultiValue) => parse_option_ids(&mut violations, &draft.multi_values),
            _ => Vec::new(),
        };

        let summary = draft.summary.filter(|s| present(Some(s.as_str())).is_some());
        if input_type == Some(InputType::Textarea) && summary.is_none() {
            violations.push(required_if(AssignmentFields::SUMMARY, InputType::Textarea));
        }

        let (Some(product_id), Some(input_type), Some(specification_id)) =
            (product_id, input_type, specification_id)
        else {
            debug!(count = violations.len(), "assignment draft rejected");
            return Err(DomainError::validation(violations));
        };
        if !violations.is_empty() {
            debug!(count = violations.len(), "assignment draft rejected");
            return Err(DomainError::validation(violations));
        }

        let locale = present(draft.locale.as_deref())
            .map_or_else(|| self.locales.default_locale(), str::to_owned)
            .to_lowercase();
        let value = match (input_type, summary) {
            (InputType::MultiValue, _) => AssignmentValue::MultiValue { option_ids },
            (InputType::SingleValue, summary) => AssignmentValue::SingleValue { locale, summary },
            (InputType::Textarea, summary) => AssignmentValue::Textarea {
                locale,
                summary: summary.unwrap_or_default(),
            },
        };

        Ok(NewAssignment {
            product_id,
            specification_id,
            allow_selection: is_on(draft.allow_selection.as_deref()),
            status: AssignmentStatus::from_flag(is_on(draft.status.as_deref())),
            value,
        })
    }
}

/// A value counts as present when it is not blank.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_on(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == TOGGLE_ON)
}

fn required_id(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    raw: Option<&str>,
) -> Option<i64> {
    let Some(raw) = present(raw) else {
        violations.push(required(field));
        return None;
    };
    if let Ok(id) = raw.parse::<i64>() {
        Some(id)
    } else {
        violations.push(FieldViolation::new(
            field,
            format!("The {} must be an integer.", human(field)),
        ));
        None
    }
}

fn parse_option_ids(violations: &mut Vec<FieldViolation>, raw: &[String]) -> Vec<i64> {
    let entries: Vec<&str> = raw.iter().filter_map(|v| present(Some(v.as_str()))).collect();
    if entries.is_empty() {
        violations.push(required_if(
            AssignmentFields::MULTI_VALUES,
            InputType::MultiValue,
        ));
        return Vec::new();
    }

    let parsed: Result<Vec<i64>, _> = entries.iter().map(|v| v.parse::<i64>()).collect();
    parsed.unwrap_or_else(|_| {
        violations.push(FieldViolation::new(
            AssignmentFields::MULTI_VALUES,
            "The multi values must contain integer ids.",
        ));
        Vec::new()
    })
}

fn human(field: &str) -> String {
    field.replace('_', " ")
}

fn required(field: &str) -> FieldViolation {
    FieldViolation::new(field, format!("The {} field is required.", human(field)))
}

fn required_if(field: &str, input_type: InputType) -> FieldViolation {
    FieldViolation::new(
        field,
        format!(
            "The {} field is required when input type is {input_type}.",
            human(field)
        ),
    )
}

fn invalid_selection(field: &str) -> FieldViolation {
    FieldViolation::new(field, format!("The selected {} is invalid.", human(field)))
}
