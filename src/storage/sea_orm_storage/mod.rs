//! Implementação de storage com SeaORM
//!
//! Camada única de persistência, com suporte a SQLite, PostgreSQL e MySQL.

mod assessments;
mod awards;
mod catalog;
mod evaluators;
mod projects;
mod responses;
mod stats;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SaipruError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// Storage SeaORM
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Cria a instância de storage
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // escolhe o modo de conexão conforme o banco
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // roda as migrações
        Migrator::up(&db, None)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha na migração: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// Conexão SQLite (WAL + pragmas)
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SaipruError::database_config(format!("URL SQLite inválida: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SaipruError::database_connection(format!("falha ao conectar no SQLite: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Conexão genérica (PostgreSQL, MySQL)
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SaipruError::database_connection(format!("falha ao conectar no banco: {e}")))
    }

    /// Monta a URL de conexão inferindo o tipo do banco
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SaipruError::database_config(format!(
                "não foi possível inferir o tipo do banco pela URL: {url}. Suportado: sqlite://, postgres://, mysql:// ou caminho .db/.sqlite"
            )))
        }
    }
}

// Implementação do trait Storage
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
use crate::storage::Storage;

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_evaluator(
        &self,
        user: NewUser,
        pin: String,
        category_ids: Vec<i64>,
        project_ids: Vec<i64>,
    ) -> Result<Evaluator> {
        self.create_evaluator_impl(user, pin, category_ids, project_ids)
            .await
    }

    async fn get_evaluator_by_pin(&self, pin: &str) -> Result<Option<Evaluator>> {
        self.get_evaluator_by_pin_impl(pin).await
    }

    async fn get_evaluator_by_user_id(&self, user_id: i64) -> Result<Option<Evaluator>> {
        self.get_evaluator_by_user_id_impl(user_id).await
    }

    async fn pin_exists(&self, pin: &str) -> Result<bool> {
        self.pin_exists_impl(pin).await
    }

    async fn list_evaluators(&self) -> Result<Vec<EvaluatorWithName>> {
        self.list_evaluators_impl().await
    }

    async fn create_project(&self, project: CreateProjectRequest) -> Result<Project> {
        self.create_project_impl(project).await
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.get_project_by_id_impl(id).await
    }

    async fn list_projects_with_pagination(
        &self,
        year: i32,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse> {
        self.list_projects_with_pagination_impl(year, query).await
    }

    async fn delete_project(&self, id: i64) -> Result<bool> {
        self.delete_project_impl(id).await
    }

    async fn list_main_categories(&self) -> Result<Vec<Category>> {
        self.list_main_categories_impl().await
    }

    async fn list_school_grades(&self) -> Result<Vec<SchoolGrade>> {
        self.list_school_grades_impl().await
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.list_questions_impl().await
    }

    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>> {
        self.get_assessment_by_id_impl(id).await
    }

    async fn list_assessments_by_evaluator(
        &self,
        evaluator_id: i64,
        year: i32,
    ) -> Result<Vec<AssessmentWithProject>> {
        self.list_assessments_by_evaluator_impl(evaluator_id, year)
            .await
    }

    async fn replace_assessment_responses(
        &self,
        assessment_id: i64,
        responses: Vec<NewResponse>,
    ) -> Result<usize> {
        self.replace_assessment_responses_impl(assessment_id, responses)
            .await
    }

    async fn list_score_rows(&self, year: i32) -> Result<Vec<ScoreRow>> {
        self.list_score_rows_impl(year).await
    }

    async fn list_scores_for_project(&self, project_id: i64) -> Result<Vec<ScoreRow>> {
        self.list_scores_for_project_impl(project_id).await
    }

    async fn list_project_completion(&self, year: i32) -> Result<Vec<ProjectCompletion>> {
        self.list_project_completion_impl(year).await
    }

    async fn count_active_evaluators(&self, year: i32) -> Result<i64> {
        self.count_active_evaluators_impl(year).await
    }

    async fn list_awards(&self) -> Result<Vec<Award>> {
        self.list_awards_impl().await
    }

    async fn get_award_by_id(&self, id: i64) -> Result<Option<Award>> {
        self.get_award_by_id_impl(id).await
    }

    async fn list_ranking_candidates(&self, year: i32) -> Result<Vec<RankingCandidate>> {
        self.list_ranking_candidates_impl(year).await
    }
}
