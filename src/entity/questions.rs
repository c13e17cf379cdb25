//! Entidade de pergunta do questionário

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub scientific_text: String,
    #[sea_orm(column_type = "Text")]
    pub technological_text: String,
    pub question_type: i32,
    pub number_alternatives: i32,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::responses::Entity")]
    Responses,
    #[sea_orm(has_many = "super::award_questions::Entity")]
    AwardQuestions,
}

impl Related<super::responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl Related<super::award_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AwardQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::{Question, QuestionType};

        Question {
            id: self.id,
            scientific_text: self.scientific_text,
            technological_text: self.technological_text,
            question_type: QuestionType::from_i32(self.question_type)
                .unwrap_or(QuestionType::MultipleChoice),
            number_alternatives: self.number_alternatives,
        }
    }
}
