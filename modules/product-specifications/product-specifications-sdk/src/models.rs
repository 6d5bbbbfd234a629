//! Public models for the product-specifications module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the module and its consumers. Catalog entities (specifications,
//! multi-value options, products) are read-only here; assignments are the
//! only entity this module writes.

use std::fmt;
use std::str::FromStr;

use time::OffsetDateTime;

/// Declared input type of a specification, copied onto each assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    SingleValue,
    MultiValue,
    Textarea,
}

impl InputType {
    /// The fixed enumeration accepted by validation, in storage spelling.
    pub const ALL: [InputType; 3] = [Self::SingleValue, Self::MultiValue, Self::Textarea];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleValue => "single_value",
            Self::MultiValue => "multi_value",
            Self::Textarea => "textarea",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of [`InputType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input type '{0}'")]
pub struct UnknownInputType(pub String);

impl FromStr for InputType {
    type Err = UnknownInputType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownInputType(s.to_owned()))
    }
}

/// Visibility state of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentStatus {
    Active,
    Inactive,
}

impl AssignmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Maps the boolean-ish form toggle onto a status.
    #[must_use]
    pub fn from_flag(on: bool) -> Self {
        if on { Self::Active } else { Self::Inactive }
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown assignment status '{other}'")),
        }
    }
}

/// One localized text of a translated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Lower-cased locale code, e.g. `en` or `pt-br`.
    pub locale: String,
    pub text: String,
}

/// Picks the text for `locale`, then `fallback`, then the first translation.
#[must_use]
pub fn resolve_translation<'a>(
    translations: &'a [Translation],
    locale: &str,
    fallback: &str,
) -> Option<&'a str> {
    translations
        .iter()
        .find(|t| t.locale == locale)
        .or_else(|| translations.iter().find(|t| t.locale == fallback))
        .or_else(|| translations.first())
        .map(|t| t.text.as_str())
}

/// Catalog-level attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub id: i64,
    pub input_type: InputType,
    /// Translated titles.
    pub titles: Vec<Translation>,
}

impl Specification {
    #[must_use]
    pub fn title(&self, locale: &str, fallback: &str) -> Option<&str> {
        resolve_translation(&self.titles, locale, fallback)
    }
}

/// A fixed selectable choice belonging to a `multi_value` specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValueOption {
    pub id: i64,
    pub specification_id: i64,
    pub titles: Vec<Translation>,
}

impl MultiValueOption {
    #[must_use]
    pub fn title(&self, locale: &str, fallback: &str) -> Option<&str> {
        resolve_translation(&self.titles, locale, fallback)
    }
}

/// A specification together with its option set.
///
/// `multi_values` is empty unless the specification is `multi_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationDetails {
    pub specification: Specification,
    pub multi_values: Vec<MultiValueOption>,
}

/// Reduced projection returned by title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationHit {
    pub id: i64,
    pub title: Option<String>,
}

/// All specifications linked to one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpecifications {
    pub specifications: Vec<Specification>,
    /// Lower-cased default locale of the deployment.
    pub default_locale: String,
}

/// Read-only view of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub creator_id: i64,
}

/// Write-side value payload of an assignment, one variant per input type.
///
/// Holding the value as a tagged variant keeps the declared input type and
/// the shape of the submitted data from disagreeing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentValue {
    /// Free text; an absent summary leaves stored translations untouched.
    SingleValue {
        locale: String,
        summary: Option<String>,
    },
    /// Option ids in submission order, duplicates preserved.
    MultiValue { option_ids: Vec<i64> },
    /// Long-form text; the summary is mandatory.
    Textarea { locale: String, summary: String },
}

impl AssignmentValue {
    #[must_use]
    pub fn input_type(&self) -> InputType {
        match self {
            Self::SingleValue { .. } => InputType::SingleValue,
            Self::MultiValue { .. } => InputType::MultiValue,
            Self::Textarea { .. } => InputType::Textarea,
        }
    }
}

/// Stored values of an assignment, matching its current input type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentValues {
    /// Per-locale text rows (`single_value` and `textarea`).
    Translated(Vec<Translation>),
    /// Linked option ids (`multi_value`).
    MultiValue(Vec<i64>),
}

/// A product's use of one catalog specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub creator_id: i64,
    pub product_id: i64,
    /// Fixed at creation.
    pub specification_id: i64,
    pub input_type: InputType,
    pub allow_selection: bool,
    pub order: Option<i32>,
    pub status: AssignmentStatus,
    /// Reset on every update.
    pub created_at: OffsetDateTime,
    pub values: AssignmentValues,
}

/// Validated assignment submission used by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub product_id: i64,
    /// Ignored by update.
    pub specification_id: i64,
    pub allow_selection: bool,
    pub status: AssignmentStatus,
    pub value: AssignmentValue,
}

impl NewAssignment {
    #[must_use]
    pub fn input_type(&self) -> InputType {
        self.value.input_type()
    }
}

/// Raw assignment payload as submitted by a caller, before validation.
///
/// Every field is kept in its submitted textual form so that validation can
/// report all malformed fields at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub product_id: Option<String>,
    pub input_type: Option<String>,
    pub specification_id: Option<String>,
    /// A single scalar submission arrives as a one-element list.
    pub multi_values: Vec<String>,
    pub summary: Option<String>,
    /// `"on"` enables selection.
    pub allow_selection: Option<String>,
    /// `"on"` marks the assignment active.
    pub status: Option<String>,
    pub locale: Option<String>,
}
