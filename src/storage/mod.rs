use std::sync::Arc;

use crate::models::{
    assessments::entities::{Assessment, AssessmentWithProject},
    awards::entities::{Award, RankingCandidate, SchoolGrade},
    categories::entities::Category,
    dashboard::entities::ProjectCompletion,
    evaluators::{entities::Evaluator, responses::EvaluatorWithName},
    projects::{
        entities::Project,
        requests::{CreateProjectRequest, ProjectListQuery},
        responses::ProjectListResponse,
    },
    questions::entities::Question,
    responses::entities::{NewResponse, ScoreRow},
    users::entities::{NewUser, User},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Usuários
    // Cria usuário
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // Busca usuário por id
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // Busca usuário por nome de login
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // Atualiza o último login
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // Conta usuários cadastrados
    async fn count_users(&self) -> Result<u64>;

    /// Avaliadores
    // Cria o avaliador com o usuário vinculado, áreas de atuação e uma
    // avaliação por trabalho selecionado, tudo em uma transação
    async fn create_evaluator(
        &self,
        user: NewUser,
        pin: String,
        category_ids: Vec<i64>,
        project_ids: Vec<i64>,
    ) -> Result<Evaluator>;
    // Busca avaliador pelo PIN (login do app)
    async fn get_evaluator_by_pin(&self, pin: &str) -> Result<Option<Evaluator>>;
    // Busca avaliador pelo usuário vinculado
    async fn get_evaluator_by_user_id(&self, user_id: i64) -> Result<Option<Evaluator>>;
    // Verifica se o PIN já está em uso (inclui tombstones, PIN é único)
    async fn pin_exists(&self, pin: &str) -> Result<bool>;
    // Lista avaliadores com o nome do usuário vinculado
    async fn list_evaluators(&self) -> Result<Vec<EvaluatorWithName>>;

    /// Trabalhos
    // Cria trabalho com os estudantes autores
    async fn create_project(&self, project: CreateProjectRequest) -> Result<Project>;
    // Busca trabalho por id (exclui tombstones)
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>>;
    // Lista trabalhos do ano com paginação
    async fn list_projects_with_pagination(
        &self,
        year: i32,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse>;
    // Soft delete do trabalho
    async fn delete_project(&self, id: i64) -> Result<bool>;

    /// Catálogo
    // Lista categorias principais ativas
    async fn list_main_categories(&self) -> Result<Vec<Category>>;
    // Lista graus de ensino
    async fn list_school_grades(&self) -> Result<Vec<SchoolGrade>>;
    // Lista perguntas ativas do questionário
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Avaliações
    // Busca avaliação por id
    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>>;
    // Lista as avaliações de um avaliador no ano, com dados do trabalho e
    // o indicador has_response
    async fn list_assessments_by_evaluator(
        &self,
        evaluator_id: i64,
        year: i32,
    ) -> Result<Vec<AssessmentWithProject>>;

    /// Respostas
    // Substitui todas as respostas da avaliação (apaga-e-insere em uma
    // única transação); retorna quantas respostas foram gravadas
    async fn replace_assessment_responses(
        &self,
        assessment_id: i64,
        responses: Vec<NewResponse>,
    ) -> Result<usize>;
    // Linhas de nota (múltipla escolha) de todos os trabalhos ativos do ano
    async fn list_score_rows(&self, year: i32) -> Result<Vec<ScoreRow>>;
    // Linhas de nota de um único trabalho
    async fn list_scores_for_project(&self, project_id: i64) -> Result<Vec<ScoreRow>>;

    /// Painel
    // Completude de cada trabalho ativo do ano
    async fn list_project_completion(&self, year: i32) -> Result<Vec<ProjectCompletion>>;
    // Avaliadores com ao menos uma avaliação no ano
    async fn count_active_evaluators(&self, year: i32) -> Result<i64>;

    /// Premiações
    // Lista premiações ativas com as perguntas e pesos
    async fn list_awards(&self) -> Result<Vec<Award>>;
    // Busca premiação ativa por id, com as perguntas e pesos
    async fn get_award_by_id(&self, id: i64) -> Result<Option<Award>>;
    // Trabalhos candidatos ao ranking do ano, com categoria principal e
    // graus de ensino dos estudantes
    async fn list_ranking_candidates(&self, year: i32) -> Result<Vec<RankingCandidate>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
