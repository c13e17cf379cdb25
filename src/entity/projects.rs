//! Entidade de trabalho (projeto de feira)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub category_id: i64,
    pub project_type: i32,
    pub external_id: String,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
    #[sea_orm(has_many = "super::project_students::Entity")]
    ProjectStudents,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl Related<super::project_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversão do modelo de banco para o modelo de negócio
impl Model {
    pub fn into_project(self) -> crate::models::projects::entities::Project {
        use crate::models::projects::entities::{Project, ProjectType};
        use chrono::{DateTime, Utc};

        Project {
            id: self.id,
            title: self.title,
            year: self.year,
            category_id: self.category_id,
            project_type: ProjectType::from_i32(self.project_type)
                .unwrap_or(ProjectType::Scientific),
            external_id: self.external_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
