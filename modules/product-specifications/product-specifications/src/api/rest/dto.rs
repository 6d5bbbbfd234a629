//! Request and response bodies of the REST API.

use product_specifications_sdk::{
    Assignment, AssignmentDraft, AssignmentValues, CategorySpecifications, MultiValueOption,
    Specification, SpecificationDetails, SpecificationHit, Translation,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

/// Numeric id that may also arrive as a string, as submitted by HTML forms.
///
/// Any other JSON value is kept as its JSON text so that validation reports
/// it against the field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl IdInput {
    fn into_raw(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
            Self::Other(v) => v.to_string(),
        }
    }
}

/// Free-text field; a non-string value is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Other(serde_json::Value),
}

impl TextInput {
    fn into_raw(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Other(v) => v.to_string(),
        }
    }
}

/// A list of option ids or a single one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum MultiValuesInput {
    Many(Vec<IdInput>),
    One(IdInput),
}

impl MultiValuesInput {
    fn into_list(self) -> Vec<String> {
        match self {
            Self::Many(ids) => ids.into_iter().map(IdInput::into_raw).collect(),
            Self::One(id) => vec![id.into_raw()],
        }
    }
}

/// Form toggle: JSON booleans or the checkbox value `"on"`. Anything else
/// counts as off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ToggleInput {
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl ToggleInput {
    fn into_raw(self) -> Option<String> {
        match self {
            Self::Flag(true) => Some("on".to_owned()),
            Self::Flag(false) => None,
            Self::Text(s) => Some(s),
            Self::Other(v) => Some(v.to_string()),
        }
    }
}

/// Assignment payload of create and update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    #[serde(default, alias = "productId")]
    pub product_id: Option<IdInput>,
    #[serde(default, alias = "inputType")]
    pub input_type: Option<TextInput>,
    #[serde(default, alias = "specificationId")]
    pub specification_id: Option<IdInput>,
    #[serde(default, alias = "multiValues")]
    pub multi_values: Option<MultiValuesInput>,
    #[serde(default)]
    pub summary: Option<TextInput>,
    #[serde(default, alias = "allowSelection")]
    pub allow_selection: Option<ToggleInput>,
    #[serde(default)]
    pub status: Option<ToggleInput>,
    #[serde(default)]
    pub locale: Option<TextInput>,
}

impl From<AssignmentRequest> for AssignmentDraft {
    fn from(req: AssignmentRequest) -> Self {
        Self {
            product_id: req.product_id.map(IdInput::into_raw),
            input_type: req.input_type.map(TextInput::into_raw),
            specification_id: req.specification_id.map(IdInput::into_raw),
            multi_values: req
                .multi_values
                .map(MultiValuesInput::into_list)
                .unwrap_or_default(),
            summary: req.summary.map(TextInput::into_raw),
            allow_selection: req.allow_selection.and_then(ToggleInput::into_raw),
            status: req.status.and_then(ToggleInput::into_raw),
            locale: req.locale.map(TextInput::into_raw),
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocaleQuery {
    /// Locale for projected titles; defaults to the configured locale.
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-sensitive substring; empty matches nothing.
    #[serde(default)]
    pub term: String,
    /// Without a category the result is empty.
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<i64>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TranslationDto {
    pub locale: String,
    pub text: String,
}

impl From<Translation> for TranslationDto {
    fn from(t: Translation) -> Self {
        Self {
            locale: t.locale,
            text: t.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecificationDto {
    pub id: i64,
    pub input_type: String,
    /// Title in the requested locale.
    pub title: Option<String>,
    pub titles: Vec<TranslationDto>,
}

impl SpecificationDto {
    #[must_use]
    pub fn project(spec: Specification, locale: &str, fallback: &str) -> Self {
        let title = spec.title(locale, fallback).map(str::to_owned);
        Self {
            id: spec.id,
            input_type: spec.input_type.as_str().to_owned(),
            title,
            titles: spec.titles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MultiValueOptionDto {
    pub id: i64,
    pub title: Option<String>,
    pub titles: Vec<TranslationDto>,
}

impl MultiValueOptionDto {
    #[must_use]
    pub fn project(option: MultiValueOption, locale: &str, fallback: &str) -> Self {
        let title = option.title(locale, fallback).map(str::to_owned);
        Self {
            id: option.id,
            title,
            titles: option.titles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecificationDetailsDto {
    pub specification: SpecificationDto,
    pub multi_values: Vec<MultiValueOptionDto>,
}

impl SpecificationDetailsDto {
    #[must_use]
    pub fn project(details: SpecificationDetails, locale: &str, fallback: &str) -> Self {
        Self {
            specification: SpecificationDto::project(details.specification, locale, fallback),
            multi_values: details
                .multi_values
                .into_iter()
                .map(|o| MultiValueOptionDto::project(o, locale, fallback))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecificationHitDto {
    pub id: i64,
    pub title: Option<String>,
}

impl From<SpecificationHit> for SpecificationHitDto {
    fn from(hit: SpecificationHit) -> Self {
        Self {
            id: hit.id,
            title: hit.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategorySpecificationsDto {
    pub specifications: Vec<SpecificationDto>,
    pub default_locale: String,
}

impl From<CategorySpecifications> for CategorySpecificationsDto {
    fn from(c: CategorySpecifications) -> Self {
        let fallback = c.default_locale;
        Self {
            specifications: c
                .specifications
                .into_iter()
                .map(|s| SpecificationDto::project(s, &fallback, &fallback))
                .collect(),
            default_locale: fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i64,
    pub creator_id: i64,
    pub product_id: i64,
    pub specification_id: i64,
    pub input_type: String,
    pub allow_selection: bool,
    pub order: Option<i32>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Translated value rows; empty for `multi_value`.
    pub translations: Vec<TranslationDto>,
    /// Linked option ids; empty unless `multi_value`.
    pub multi_values: Vec<i64>,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        let (translations, multi_values) = match a.values {
            AssignmentValues::Translated(rows) => {
                (rows.into_iter().map(Into::into).collect(), Vec::new())
            }
            AssignmentValues::MultiValue(ids) => (Vec::new(), ids),
        };
        Self {
            id: a.id,
            creator_id: a.creator_id,
            product_id: a.product_id,
            specification_id: a.specification_id,
            input_type: a.input_type.as_str().to_owned(),
            allow_selection: a.allow_selection,
            order: a.order,
            status: a.status.as_str().to_owned(),
            created_at: a.created_at,
            translations,
            multi_values,
        }
    }
}

/// Success envelope of create and update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentEnvelope {
    pub code: u16,
    pub assignment: AssignmentDto,
}

impl AssignmentEnvelope {
    #[must_use]
    pub fn ok(assignment: Assignment) -> Self {
        Self {
            code: 200,
            assignment: assignment.into(),
        }
    }
}
