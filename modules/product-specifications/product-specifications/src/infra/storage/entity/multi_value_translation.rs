use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_specification_multi_value_translations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_specification_multi_value_id: i64,
    pub locale: String,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::multi_value::Entity",
        from = "Column::ProductSpecificationMultiValueId",
        to = "super::multi_value::Column::Id",
        on_delete = "Cascade"
    )]
    MultiValue,
}

impl Related<super::multi_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MultiValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
