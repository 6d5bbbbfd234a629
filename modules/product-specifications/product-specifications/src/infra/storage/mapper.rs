//! Conversions between storage rows and SDK models.

use anyhow::Context;
use product_specifications_sdk::{
    Assignment, AssignmentStatus, AssignmentValues, InputType, MultiValueOption, Product,
    Specification, Translation,
};

use super::entity::{
    assignment, assignment_multi_value, assignment_translation, multi_value,
    multi_value_translation, product, specification, specification_translation,
};

impl From<product::Model> for Product {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            creator_id: m.creator_id,
        }
    }
}

fn parse_input_type(raw: &str) -> anyhow::Result<InputType> {
    raw.parse::<InputType>()
        .with_context(|| format!("corrupt input type column '{raw}'"))
}

pub fn specification_from_rows(
    m: specification::Model,
    titles: Vec<specification_translation::Model>,
) -> anyhow::Result<Specification> {
    Ok(Specification {
        id: m.id,
        input_type: parse_input_type(&m.input_type)?,
        titles: titles
            .into_iter()
            .map(|t| Translation {
                locale: t.locale,
                text: t.title,
            })
            .collect(),
    })
}

pub fn multi_value_from_rows(
    m: multi_value::Model,
    titles: Vec<multi_value_translation::Model>,
) -> MultiValueOption {
    MultiValueOption {
        id: m.id,
        specification_id: m.specification_id,
        titles: titles
            .into_iter()
            .map(|t| Translation {
                locale: t.locale,
                text: t.title,
            })
            .collect(),
    }
}

/// Builds the assignment with the value rows matching its input type.
///
/// Rows of the other shape are ignored.
pub fn assignment_from_rows(
    m: assignment::Model,
    translations: Vec<assignment_translation::Model>,
    links: Vec<assignment_multi_value::Model>,
) -> anyhow::Result<Assignment> {
    let input_type = parse_input_type(&m.input_type)?;
    let status = m
        .status
        .parse::<AssignmentStatus>()
        .map_err(anyhow::Error::msg)?;

    let values = match input_type {
        InputType::MultiValue => AssignmentValues::MultiValue(
            links
                .into_iter()
                .map(|l| l.specification_multi_value_id)
                .collect(),
        ),
        InputType::SingleValue | InputType::Textarea => AssignmentValues::Translated(
            translations
                .into_iter()
                .map(|t| Translation {
                    locale: t.locale,
                    text: t.value,
                })
                .collect(),
        ),
    };

    Ok(Assignment {
        id: m.id,
        creator_id: m.creator_id,
        product_id: m.product_id,
        specification_id: m.product_specification_id,
        input_type,
        allow_selection: m.allow_selection,
        order: m.order,
        status,
        created_at: m.created_at,
        values,
    })
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;
