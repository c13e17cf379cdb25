//! Entidade de categoria
//!
//! Categorias com main_category_id nulo são categorias principais; as demais
//! são subcategorias da categoria apontada.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub main_category_id: Option<i64>,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::MainCategoryId",
        to = "Column::Id"
    )]
    MainCategory,
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self) -> crate::models::categories::entities::Category {
        crate::models::categories::entities::Category {
            id: self.id,
            name: self.name,
            main_category_id: self.main_category_id,
        }
    }
}
