//! Catálogo: categorias, graus de ensino e perguntas

use super::SeaOrmStorage;
use crate::entity::categories::{Column as CategoryColumn, Entity as Categories};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::entity::school_grades::{Column as SchoolGradeColumn, Entity as SchoolGrades};
use crate::errors::{Result, SaipruError};
use crate::models::{
    awards::entities::SchoolGrade, categories::entities::Category, questions::entities::Question,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// Lista categorias principais ativas
    pub async fn list_main_categories_impl(&self) -> Result<Vec<Category>> {
        let rows = Categories::find()
            .filter(CategoryColumn::DeletedAt.is_null())
            .filter(CategoryColumn::MainCategoryId.is_null())
            .order_by_asc(CategoryColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar categorias: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_category()).collect())
    }

    /// Lista graus de ensino
    pub async fn list_school_grades_impl(&self) -> Result<Vec<SchoolGrade>> {
        let rows = SchoolGrades::find()
            .order_by_asc(SchoolGradeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SaipruError::database_operation(format!("falha ao listar graus de ensino: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_school_grade()).collect())
    }

    /// Lista perguntas ativas do questionário
    pub async fn list_questions_impl(&self) -> Result<Vec<Question>> {
        let rows = Questions::find()
            .filter(QuestionColumn::DeletedAt.is_null())
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar perguntas: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_question()).collect())
    }
}
