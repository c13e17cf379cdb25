use serde::Deserialize;
use ts_rs::TS;

use super::entities::ProjectType;

// Criação de trabalho (CRUD da administração)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub struct CreateProjectRequest {
    pub title: String,
    pub year: i32,
    pub category_id: i64,
    pub project_type: ProjectType,
    pub external_id: String,
    /// Estudantes autores do trabalho
    #[serde(default)]
    pub student_ids: Vec<i64>,
}

// Filtros da listagem de trabalhos
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub struct ProjectListQuery {
    /// Ano da edição; quando ausente usa o ano padrão configurado
    pub year: Option<i32>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}
