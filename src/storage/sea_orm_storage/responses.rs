//! Operações de resposta

use super::SeaOrmStorage;
use crate::entity::assessments::Relation as AssessmentRelation;
use crate::entity::projects::Column as ProjectColumn;
use crate::entity::questions::Column as QuestionColumn;
use crate::entity::responses::{ActiveModel, Column, Entity as Responses, Relation};
use crate::errors::{Result, SaipruError};
use crate::models::questions::entities::QuestionType;
use crate::models::responses::entities::{NewResponse, ScoreRow};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// Substitui todas as respostas da avaliação. Apaga-e-insere na mesma
    /// transação: uma leitura concorrente nunca observa o conjunto pela
    /// metade.
    pub async fn replace_assessment_responses_impl(
        &self,
        assessment_id: i64,
        responses: Vec<NewResponse>,
    ) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();
        let count = responses.len();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao abrir transação: {e}")))?;

        Responses::delete_many()
            .filter(Column::AssessmentId.eq(assessment_id))
            .exec(&txn)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao apagar respostas: {e}")))?;

        if !responses.is_empty() {
            let models: Vec<ActiveModel> = responses
                .into_iter()
                .map(|r| ActiveModel {
                    assessment_id: Set(assessment_id),
                    question_id: Set(r.question_id),
                    response: Set(r.response),
                    score: Set(r.score),
                    created_at: Set(now),
                    ..Default::default()
                })
                .collect();

            Responses::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    SaipruError::database_operation(format!("falha ao gravar respostas: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao confirmar transação: {e}")))?;

        Ok(count)
    }

    /// Linhas de nota de múltipla escolha de todos os trabalhos ativos do
    /// ano (insumo do agregador de notas e do ranking)
    pub async fn list_score_rows_impl(&self, year: i32) -> Result<Vec<ScoreRow>> {
        let rows: Vec<(i64, i64, Option<i32>)> = Responses::find()
            .select_only()
            .column_as(ProjectColumn::Id, "project_id")
            .column(Column::QuestionId)
            .column(Column::Score)
            .join(JoinType::InnerJoin, Relation::Assessment.def())
            .join(JoinType::InnerJoin, AssessmentRelation::Project.def())
            .join(JoinType::InnerJoin, Relation::Question.def())
            .filter(ProjectColumn::Year.eq(year))
            .filter(ProjectColumn::DeletedAt.is_null())
            .filter(QuestionColumn::DeletedAt.is_null())
            .filter(QuestionColumn::QuestionType.eq(QuestionType::MultipleChoice.as_i32()))
            .filter(Column::Score.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar notas: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(project_id, question_id, score)| {
                score.map(|score| ScoreRow {
                    project_id,
                    question_id,
                    score,
                })
            })
            .collect())
    }

    /// Linhas de nota de um único trabalho
    pub async fn list_scores_for_project_impl(&self, project_id: i64) -> Result<Vec<ScoreRow>> {
        let rows: Vec<(i64, i64, Option<i32>)> = Responses::find()
            .select_only()
            .column_as(ProjectColumn::Id, "project_id")
            .column(Column::QuestionId)
            .column(Column::Score)
            .join(JoinType::InnerJoin, Relation::Assessment.def())
            .join(JoinType::InnerJoin, AssessmentRelation::Project.def())
            .join(JoinType::InnerJoin, Relation::Question.def())
            .filter(ProjectColumn::Id.eq(project_id))
            .filter(QuestionColumn::DeletedAt.is_null())
            .filter(QuestionColumn::QuestionType.eq(QuestionType::MultipleChoice.as_i32()))
            .filter(Column::Score.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar notas: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(project_id, question_id, score)| {
                score.map(|score| ScoreRow {
                    project_id,
                    question_id,
                    score,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::{
        AssessmentActiveModel, Assessments, Categories, CategoryActiveModel, EvaluatorActiveModel,
        Evaluators, ProjectActiveModel, Projects, QuestionActiveModel, Questions, UserActiveModel,
        Users,
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, PaginatorTrait};

    const YEAR: i32 = 2025;
    const ASSESSMENT_ID: i64 = 1;

    // Banco SQLite em memória com a cadeia completa de chaves
    // estrangeiras: usuário, avaliador, categoria, trabalho, avaliação e
    // duas perguntas (uma de múltipla escolha, uma dissertativa).
    async fn storage_with_fixture() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Users::insert(UserActiveModel {
            id: Set(1),
            username: Set("maria.1234".to_string()),
            password_hash: Set("hash".to_string()),
            role: Set("evaluator".to_string()),
            status: Set("active".to_string()),
            display_name: Set(Some("Maria".to_string())),
            last_login: Set(None),
            created_at: Set(0),
            updated_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Categories::insert(CategoryActiveModel {
            id: Set(1),
            name: Set("Exatas".to_string()),
            main_category_id: Set(None),
            deleted_at: Set(None),
            created_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Projects::insert(ProjectActiveModel {
            id: Set(1),
            title: Set("Horta automatizada".to_string()),
            year: Set(YEAR),
            category_id: Set(1),
            project_type: Set(1),
            external_id: Set("A-01".to_string()),
            deleted_at: Set(None),
            created_at: Set(0),
            updated_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Evaluators::insert(EvaluatorActiveModel {
            id: Set(1),
            user_id: Set(1),
            pin: Set("1234".to_string()),
            deleted_at: Set(None),
            created_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Assessments::insert(AssessmentActiveModel {
            id: Set(ASSESSMENT_ID),
            evaluator_id: Set(1),
            project_id: Set(1),
            created_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Questions::insert(QuestionActiveModel {
            id: Set(1),
            scientific_text: Set("Metodologia".to_string()),
            technological_text: Set("Metodologia".to_string()),
            question_type: Set(QuestionType::MultipleChoice.as_i32()),
            number_alternatives: Set(10),
            deleted_at: Set(None),
            created_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        Questions::insert(QuestionActiveModel {
            id: Set(2),
            scientific_text: Set("Comentários".to_string()),
            technological_text: Set("Comentários".to_string()),
            question_type: Set(QuestionType::Text.as_i32()),
            number_alternatives: Set(0),
            deleted_at: Set(None),
            created_at: Set(0),
        })
        .exec(&db)
        .await
        .unwrap();

        SeaOrmStorage { db }
    }

    fn full_questionnaire() -> Vec<NewResponse> {
        vec![
            NewResponse {
                question_id: 1,
                score: Some(8),
                response: None,
            },
            NewResponse {
                question_id: 2,
                score: None,
                response: Some("apresentação sólida".to_string()),
            },
        ]
    }

    async fn count_responses(storage: &SeaOrmStorage) -> u64 {
        Responses::find()
            .filter(Column::AssessmentId.eq(ASSESSMENT_ID))
            .count(&storage.db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_resubmitting_same_questionnaire_keeps_row_count() {
        let storage = storage_with_fixture().await;

        let first = storage
            .replace_assessment_responses_impl(ASSESSMENT_ID, full_questionnaire())
            .await
            .unwrap();
        assert_eq!(first, 2);
        assert_eq!(count_responses(&storage).await, 2);

        // Reenvio idêntico: substitui, nunca acumula
        let second = storage
            .replace_assessment_responses_impl(ASSESSMENT_ID, full_questionnaire())
            .await
            .unwrap();
        assert_eq!(second, 2);
        assert_eq!(count_responses(&storage).await, 2);

        let rows = storage.list_score_rows_impl(YEAR).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_id, 1);
        assert_eq!(rows[0].question_id, 1);
        assert_eq!(rows[0].score, 8);
    }

    #[tokio::test]
    async fn test_resubmit_replaces_previous_set() {
        let storage = storage_with_fixture().await;

        storage
            .replace_assessment_responses_impl(ASSESSMENT_ID, full_questionnaire())
            .await
            .unwrap();

        let saved = storage
            .replace_assessment_responses_impl(
                ASSESSMENT_ID,
                vec![NewResponse {
                    question_id: 1,
                    score: Some(5),
                    response: None,
                }],
            )
            .await
            .unwrap();
        assert_eq!(saved, 1);
        assert_eq!(count_responses(&storage).await, 1);

        let rows = storage.list_score_rows_impl(YEAR).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score, 5);
    }

    #[tokio::test]
    async fn test_unknown_assessment_leaves_stored_responses_untouched() {
        let storage = storage_with_fixture().await;

        storage
            .replace_assessment_responses_impl(ASSESSMENT_ID, full_questionnaire())
            .await
            .unwrap();

        // O serviço resolve a avaliação antes de gravar; id desconhecido
        // devolve None e nada é escrito
        let missing = storage.get_assessment_by_id_impl(999).await.unwrap();
        assert!(missing.is_none());
        assert_eq!(count_responses(&storage).await, 2);
    }
}
