//! Operações de premiação e candidatos ao ranking

use std::collections::{BTreeSet, HashMap};

use super::SeaOrmStorage;
use crate::entity::award_questions::{
    Column as AwardQuestionColumn, Entity as AwardQuestions, Relation as AwardQuestionRelation,
};
use crate::entity::awards::{Column, Entity as Awards};
use crate::entity::categories::Entity as Categories;
use crate::entity::project_students::{
    Column as ProjectStudentColumn, Entity as ProjectStudents, Relation as ProjectStudentRelation,
};
use crate::entity::projects::{Column as ProjectColumn, Entity as Projects};
use crate::entity::questions::Column as QuestionColumn;
use crate::entity::students::Column as StudentColumn;
use crate::errors::{Result, SaipruError};
use crate::models::awards::entities::{Award, AwardQuestion, RankingCandidate};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// Carrega os vínculos pergunta × peso dos prêmios informados,
    /// ignorando perguntas removidas
    async fn load_award_questions(
        &self,
        award_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<AwardQuestion>>> {
        if award_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64, i32)> = AwardQuestions::find()
            .select_only()
            .column(AwardQuestionColumn::AwardId)
            .column(AwardQuestionColumn::QuestionId)
            .column(AwardQuestionColumn::Weight)
            .join(JoinType::InnerJoin, AwardQuestionRelation::Question.def())
            .filter(AwardQuestionColumn::AwardId.is_in(award_ids))
            .filter(QuestionColumn::DeletedAt.is_null())
            .order_by_asc(AwardQuestionColumn::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SaipruError::database_operation(format!("falha ao buscar perguntas do prêmio: {e}"))
            })?;

        let mut by_award: HashMap<i64, Vec<AwardQuestion>> = HashMap::new();
        for (award_id, question_id, weight) in rows {
            by_award
                .entry(award_id)
                .or_default()
                .push(AwardQuestion { question_id, weight });
        }

        Ok(by_award)
    }

    /// Lista premiações ativas com suas perguntas e pesos
    pub async fn list_awards_impl(&self) -> Result<Vec<Award>> {
        let rows = Awards::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar prêmios: {e}")))?;

        let mut by_award = self
            .load_award_questions(rows.iter().map(|a| a.id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| {
                let questions = by_award.remove(&m.id).unwrap_or_default();
                m.into_award(questions)
            })
            .collect())
    }

    /// Busca premiação ativa por id
    pub async fn get_award_by_id_impl(&self, id: i64) -> Result<Option<Award>> {
        let award = Awards::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar prêmio: {e}")))?;

        let Some(award) = award else {
            return Ok(None);
        };

        let mut by_award = self.load_award_questions(vec![award.id]).await?;
        let questions = by_award.remove(&award.id).unwrap_or_default();

        Ok(Some(award.into_award(questions)))
    }

    /// Trabalhos ativos do ano com categoria principal resolvida e os graus
    /// de ensino dos estudantes autores
    pub async fn list_ranking_candidates_impl(&self, year: i32) -> Result<Vec<RankingCandidate>> {
        let rows = Projects::find()
            .filter(ProjectColumn::Year.eq(year))
            .filter(ProjectColumn::DeletedAt.is_null())
            .order_by_asc(ProjectColumn::Id)
            .find_also_related(Categories)
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar trabalhos: {e}")))?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // Graus de ensino por trabalho, via estudantes autores
        let project_ids: Vec<i64> = rows.iter().map(|(p, _)| p.id).collect();
        let grade_rows: Vec<(i64, i64)> = ProjectStudents::find()
            .select_only()
            .column(ProjectStudentColumn::ProjectId)
            .column(StudentColumn::SchoolGradeId)
            .join(JoinType::InnerJoin, ProjectStudentRelation::Student.def())
            .filter(ProjectStudentColumn::ProjectId.is_in(project_ids))
            .filter(StudentColumn::DeletedAt.is_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SaipruError::database_operation(format!("falha ao buscar graus de ensino: {e}"))
            })?;

        let mut grades_by_project: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        for (project_id, school_grade_id) in grade_rows {
            grades_by_project
                .entry(project_id)
                .or_default()
                .insert(school_grade_id);
        }

        Ok(rows
            .into_iter()
            .filter_map(|(project, category)| {
                let category = category?;
                // Subcategorias contam como a categoria mãe no ranking
                let main_category_id = category.main_category_id.unwrap_or(category.id);
                let school_grade_ids = grades_by_project
                    .remove(&project.id)
                    .map(|set| set.into_iter().collect())
                    .unwrap_or_default();

                Some(RankingCandidate {
                    project_id: project.id,
                    external_id: project.external_id,
                    title: project.title,
                    main_category_id,
                    school_grade_ids,
                })
            })
            .collect())
    }
}
