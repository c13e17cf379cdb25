use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::projects::entities::ProjectType;

// Avaliação: a atribuição de um avaliador a um trabalho
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/assessment.ts")]
pub struct Assessment {
    pub id: i64,
    pub evaluator_id: i64,
    pub project_id: i64,
}

// Avaliação com os dados do trabalho, como o app consome
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/assessment.ts")]
pub struct AssessmentWithProject {
    pub id: i64,
    pub project_id: i64,
    pub project_title: String,
    pub project_external_id: String,
    pub project_type: ProjectType,
    /// true quando a avaliação já tem ao menos uma resposta gravada
    pub has_response: bool,
}
