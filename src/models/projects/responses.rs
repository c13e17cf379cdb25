use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Project;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub struct ProjectListResponse {
    pub items: Vec<Project>,
    pub pagination: PaginationInfo,
}

/// Trabalho com a nota final agregada (média das respostas de múltipla
/// escolha; null enquanto não houver nenhuma resposta)
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: Project,
    pub final_note: Option<f64>,
}
