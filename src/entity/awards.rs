//! Entidade de premiação

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "awards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Apenas rótulo exibido no relatório; o particionamento por grau usa
    /// use_school_grades.
    pub school_grade_id: Option<i64>,
    pub total_positions: i32,
    pub use_school_grades: bool,
    pub use_categories: bool,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_grades::Entity",
        from = "Column::SchoolGradeId",
        to = "super::school_grades::Column::Id"
    )]
    SchoolGrade,
    #[sea_orm(has_many = "super::award_questions::Entity")]
    AwardQuestions,
}

impl Related<super::school_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolGrade.def()
    }
}

impl Related<super::award_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AwardQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_award(
        self,
        questions: Vec<crate::models::awards::entities::AwardQuestion>,
    ) -> crate::models::awards::entities::Award {
        crate::models::awards::entities::Award {
            id: self.id,
            name: self.name,
            school_grade_id: self.school_grade_id,
            total_positions: self.total_positions,
            use_school_grades: self.use_school_grades,
            use_categories: self.use_categories,
            questions,
        }
    }
}
