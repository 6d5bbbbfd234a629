use sea_orm::entity::prelude::*;

/// A product's use of one specification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_selected_specifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub creator_id: i64,
    pub product_id: i64,
    pub product_specification_id: i64,
    #[sea_orm(column_name = "type")]
    pub input_type: String,
    pub allow_selection: bool,
    pub order: Option<i32>,
    pub status: String,
    pub created_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(has_many = "super::assignment_translation::Entity")]
    Translations,
    #[sea_orm(has_many = "super::assignment_multi_value::Entity")]
    MultiValues,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::assignment_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Translations.def()
    }
}

impl Related<super::assignment_multi_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MultiValues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
