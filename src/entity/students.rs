//! Entidade de estudante

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub school_id: i64,
    pub school_grade_id: i64,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
    #[sea_orm(
        belongs_to = "super::school_grades::Entity",
        from = "Column::SchoolGradeId",
        to = "super::school_grades::Column::Id"
    )]
    SchoolGrade,
    #[sea_orm(has_many = "super::project_students::Entity")]
    ProjectStudents,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::school_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolGrade.def()
    }
}

impl Related<super::project_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
