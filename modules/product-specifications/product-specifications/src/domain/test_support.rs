//! In-memory collaborators shared by the domain and REST unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use product_specifications_sdk::{
    Assignment, AssignmentValue, AssignmentValues, InputType, MultiValueOption,
    NewAssignment, Product, SecurityContext, Specification, Translation,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::ports::{CapabilityGate, LocaleProvider};
use crate::domain::repo::{
    AssignmentsRepository, ProductsRepository, SpecificationsRepository, ValueWriteOptions,
};
use crate::domain::service::{AppServices, ServiceConfig};

pub(crate) fn title(locale: &str, text: &str) -> Translation {
    Translation {
        locale: locale.to_owned(),
        text: text.to_owned(),
    }
}

pub(crate) struct MockCatalog {
    specs: Vec<Specification>,
    options: Vec<MultiValueOption>,
    categories: HashMap<i64, Vec<i64>>,
}

impl MockCatalog {
    pub(crate) fn seeded() -> Self {
        Self {
            specs: vec![
                Specification {
                    id: 1,
                    input_type: InputType::SingleValue,
                    titles: vec![title("en", "Material"), title("de", "Stoff")],
                },
                Specification {
                    id: 3,
                    input_type: InputType::MultiValue,
                    titles: vec![title("en", "Color")],
                },
                Specification {
                    id: 4,
                    input_type: InputType::Textarea,
                    titles: vec![title("en", "Care instructions")],
                },
            ],
            options: vec![
                MultiValueOption {
                    id: 10,
                    specification_id: 3,
                    titles: vec![title("en", "Red")],
                },
                MultiValueOption {
                    id: 11,
                    specification_id: 3,
                    titles: vec![title("en", "Blue")],
                },
            ],
            categories: HashMap::from([(7, vec![1, 3, 4]), (8, vec![])]),
        }
    }
}

#[async_trait]
impl SpecificationsRepository for MockCatalog {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Specification>> {
        Ok(self.specs.iter().find(|s| s.id == id).cloned())
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.specs.iter().any(|s| s.id == id))
    }

    async fn multi_values(&self, specification_id: i64) -> anyhow::Result<Vec<MultiValueOption>> {
        Ok(self
            .options
            .iter()
            .filter(|o| o.specification_id == specification_id)
            .cloned()
            .collect())
    }

    async fn ids_for_category(&self, category_id: i64) -> anyhow::Result<Vec<i64>> {
        Ok(self.categories.get(&category_id).cloned().unwrap_or_default())
    }

    async fn list_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<Specification>> {
        Ok(self
            .specs
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }
}

pub(crate) struct MockProducts;

#[async_trait]
impl ProductsRepository for MockProducts {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Product>> {
        Ok((id == 5 || id == 6).then_some(Product { id, creator_id: 42 }))
    }
}

/// Keeps assignments in memory with the same replace-on-write rules as the
/// SQL repository.
#[derive(Default)]
pub(crate) struct MockAssignments {
    rows: Mutex<HashMap<i64, Assignment>>,
    writes: Mutex<usize>,
}

impl MockAssignments {
    pub(crate) fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn apply(values: &mut AssignmentValues, value: &AssignmentValue, opts: ValueWriteOptions) {
        match value {
            AssignmentValue::MultiValue { option_ids } => {
                *values = AssignmentValues::MultiValue(option_ids.clone());
            }
            AssignmentValue::SingleValue { locale, summary } => {
                write_text(values, locale, summary.as_deref(), opts);
            }
            AssignmentValue::Textarea { locale, summary } => {
                write_text(values, locale, Some(summary), opts);
            }
        }
    }
}

fn write_text(
    values: &mut AssignmentValues,
    locale: &str,
    summary: Option<&str>,
    opts: ValueWriteOptions,
) {
    let mut rows = match values {
        AssignmentValues::Translated(rows) => std::mem::take(rows),
        AssignmentValues::MultiValue(_) => Vec::new(),
    };
    match summary {
        Some(text) => {
            rows.retain(|t| t.locale != locale);
            rows.push(title(locale, text));
        }
        None if opts.clear_translation_on_empty_summary => rows.retain(|t| t.locale != locale),
        None => {}
    }
    *values = AssignmentValues::Translated(rows);
}

#[async_trait]
impl AssignmentsRepository for MockAssignments {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Assignment>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(
        &self,
        creator_id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Assignment> {
        *self.writes.lock().unwrap() += 1;
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len())? + 1;
        let mut assignment = Assignment {
            id,
            creator_id,
            product_id: new.product_id,
            specification_id: new.specification_id,
            input_type: new.input_type(),
            allow_selection: new.allow_selection,
            order: None,
            status: new.status,
            created_at: OffsetDateTime::now_utc(),
            values: match new.input_type() {
                InputType::MultiValue => AssignmentValues::MultiValue(Vec::new()),
                InputType::SingleValue | InputType::Textarea => {
                    AssignmentValues::Translated(Vec::new())
                }
            },
        };
        Self::apply(&mut assignment.values, &new.value, opts);
        rows.insert(id, assignment.clone());
        Ok(assignment)
    }

    async fn update(
        &self,
        id: i64,
        new: &NewAssignment,
        opts: ValueWriteOptions,
    ) -> anyhow::Result<Option<Assignment>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(existing) = rows
            .get_mut(&id)
            .filter(|a| a.product_id == new.product_id)
        else {
            return Ok(None);
        };
        *self.writes.lock().unwrap() += 1;
        existing.input_type = new.input_type();
        existing.allow_selection = new.allow_selection;
        existing.status = new.status;
        existing.created_at = OffsetDateTime::now_utc();
        Self::apply(&mut existing.values, &new.value, opts);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub(crate) struct AllowList(pub(crate) Vec<Uuid>);

#[async_trait]
impl CapabilityGate for AllowList {
    async fn is_granted(&self, ctx: &SecurityContext, capability: &str) -> bool {
        capability == "admin_store_edit_product" && self.0.contains(&ctx.subject_id())
    }
}

pub(crate) struct FixedLocale;

impl LocaleProvider for FixedLocale {
    fn default_locale(&self) -> String {
        "EN".to_owned()
    }
}

pub(crate) struct Fixture {
    pub(crate) services: AppServices,
    pub(crate) assignments: Arc<MockAssignments>,
    pub(crate) admin: SecurityContext,
}

pub(crate) fn fixture_with(config: ServiceConfig) -> Fixture {
    let admin = SecurityContext::builder()
        .subject_id(Uuid::new_v4())
        .tenant_id(Uuid::new_v4())
        .build();
    let assignments = Arc::new(MockAssignments::default());
    let services = AppServices::new(
        Arc::new(MockCatalog::seeded()),
        Arc::new(MockProducts),
        assignments.clone(),
        Arc::new(AllowList(vec![admin.subject_id()])),
        Arc::new(FixedLocale),
        config,
    );
    Fixture {
        services,
        assignments,
        admin,
    }
}

pub(crate) fn fixture() -> Fixture {
    fixture_with(ServiceConfig::default())
}
