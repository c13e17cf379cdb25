//! Operações de avaliação

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::assessments::{Column, Entity as Assessments};
use crate::entity::projects::{Column as ProjectColumn, Entity as Projects};
use crate::entity::responses::{Column as ResponseColumn, Entity as Responses};
use crate::errors::{Result, SaipruError};
use crate::models::assessments::entities::{Assessment, AssessmentWithProject};
use crate::models::projects::entities::ProjectType;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// Busca avaliação por id
    pub async fn get_assessment_by_id_impl(&self, id: i64) -> Result<Option<Assessment>> {
        let result = Assessments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar avaliação: {e}")))?;

        Ok(result.map(|m| Assessment {
            id: m.id,
            evaluator_id: m.evaluator_id,
            project_id: m.project_id,
        }))
    }

    /// Lista as avaliações de um avaliador no ano, com o trabalho e o
    /// indicador has_response
    pub async fn list_assessments_by_evaluator_impl(
        &self,
        evaluator_id: i64,
        year: i32,
    ) -> Result<Vec<AssessmentWithProject>> {
        let rows = Assessments::find()
            .filter(Column::EvaluatorId.eq(evaluator_id))
            .order_by_asc(Column::Id)
            .find_also_related(Projects)
            .filter(ProjectColumn::Year.eq(year))
            .filter(ProjectColumn::DeletedAt.is_null())
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar avaliações: {e}")))?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // has_response em uma única consulta sobre o lote
        let assessment_ids: Vec<i64> = rows.iter().map(|(a, _)| a.id).collect();
        let answered: HashSet<i64> = Responses::find()
            .select_only()
            .column(ResponseColumn::AssessmentId)
            .filter(ResponseColumn::AssessmentId.is_in(assessment_ids))
            .distinct()
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar respostas: {e}")))?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(assessment, project)| {
                let project = project?;
                Some(AssessmentWithProject {
                    id: assessment.id,
                    project_id: project.id,
                    project_title: project.title.clone(),
                    project_external_id: project.external_id.clone(),
                    project_type: ProjectType::from_i32(project.project_type)
                        .unwrap_or(ProjectType::Scientific),
                    has_response: answered.contains(&assessment.id),
                })
            })
            .collect())
    }
}
