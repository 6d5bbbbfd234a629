use sea_orm::entity::prelude::*;

/// One fixed option of a `multi_value` specification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_specification_multi_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub specification_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::specification::Entity",
        from = "Column::SpecificationId",
        to = "super::specification::Column::Id",
        on_delete = "Cascade"
    )]
    Specification,
    #[sea_orm(has_many = "super::multi_value_translation::Entity")]
    Translations,
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl Related<super::multi_value_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Translations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
