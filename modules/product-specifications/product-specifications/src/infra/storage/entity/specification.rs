use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_specifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Storage spelling of the declared input type.
    pub input_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::specification_translation::Entity")]
    Translations,
    #[sea_orm(has_many = "super::multi_value::Entity")]
    MultiValues,
    #[sea_orm(has_many = "super::category_link::Entity")]
    Categories,
}

impl Related<super::specification_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Translations.def()
    }
}

impl Related<super::multi_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MultiValues.def()
    }
}

impl Related<super::category_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
