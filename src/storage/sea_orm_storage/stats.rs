//! Consultas agregadas do painel

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::assessments::{Column, Entity as Assessments, Relation};
use crate::entity::evaluators::Column as EvaluatorColumn;
use crate::entity::projects::{Column as ProjectColumn, Entity as Projects};
use crate::entity::responses::{Column as ResponseColumn, Entity as Responses};
use crate::errors::{Result, SaipruError};
use crate::models::dashboard::entities::ProjectCompletion;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// Completude de cada trabalho ativo do ano. Três consultas e a
    /// agregação em memória; trabalhos sem nenhuma avaliação aparecem
    /// com total zero.
    pub async fn list_project_completion_impl(&self, year: i32) -> Result<Vec<ProjectCompletion>> {
        let project_ids: Vec<i64> = Projects::find()
            .select_only()
            .column(ProjectColumn::Id)
            .filter(ProjectColumn::Year.eq(year))
            .filter(ProjectColumn::DeletedAt.is_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar trabalhos: {e}")))?;

        if project_ids.is_empty() {
            return Ok(vec![]);
        }

        let assessments: Vec<(i64, i64)> = Assessments::find()
            .select_only()
            .column(Column::Id)
            .column(Column::ProjectId)
            .join(JoinType::InnerJoin, Relation::Evaluator.def())
            .filter(Column::ProjectId.is_in(project_ids.clone()))
            .filter(EvaluatorColumn::DeletedAt.is_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar avaliações: {e}")))?;

        let answered: HashSet<i64> = if assessments.is_empty() {
            HashSet::new()
        } else {
            Responses::find()
                .select_only()
                .column(ResponseColumn::AssessmentId)
                .filter(
                    ResponseColumn::AssessmentId
                        .is_in(assessments.iter().map(|(id, _)| *id).collect::<Vec<_>>()),
                )
                .distinct()
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    SaipruError::database_operation(format!("falha ao buscar respostas: {e}"))
                })?
                .into_iter()
                .collect()
        };

        let mut by_project: HashMap<i64, (i64, i64)> =
            project_ids.iter().map(|id| (*id, (0, 0))).collect();
        for (assessment_id, project_id) in assessments {
            let entry = by_project.entry(project_id).or_insert((0, 0));
            entry.0 += 1;
            if answered.contains(&assessment_id) {
                entry.1 += 1;
            }
        }

        let mut result: Vec<ProjectCompletion> = by_project
            .into_iter()
            .map(|(project_id, (total, completed))| ProjectCompletion {
                project_id,
                total_assessments: total,
                completed_assessments: completed,
            })
            .collect();
        result.sort_by_key(|c| c.project_id);

        Ok(result)
    }

    /// Quantidade de avaliadores distintos com ao menos uma avaliação
    /// atribuída no ano
    pub async fn count_active_evaluators_impl(&self, year: i32) -> Result<i64> {
        let evaluator_ids: Vec<i64> = Assessments::find()
            .select_only()
            .column(Column::EvaluatorId)
            .join(JoinType::InnerJoin, Relation::Project.def())
            .join(JoinType::InnerJoin, Relation::Evaluator.def())
            .filter(ProjectColumn::Year.eq(year))
            .filter(ProjectColumn::DeletedAt.is_null())
            .filter(EvaluatorColumn::DeletedAt.is_null())
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SaipruError::database_operation(format!("falha ao contar avaliadores: {e}"))
            })?;

        Ok(evaluator_ids.len() as i64)
    }
}
