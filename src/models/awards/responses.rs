use serde::Serialize;
use ts_rs::TS;

use super::entities::Award;

/// Linha do relatório de vencedores. Os campos do trabalho ficam nulos
/// quando a célula esgotou os candidatos antes de preencher a colocação.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct AwardReportRow {
    /// Colocação, 1 = mais prestigiosa
    pub position: i32,
    pub award_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_grade_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub winning_project_external_id: Option<String>,
    pub winning_project_title: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct AwardReportResponse {
    pub award_id: i64,
    pub award_name: String,
    pub year: i32,
    pub rows: Vec<AwardReportRow>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct AwardListResponse {
    pub items: Vec<Award>,
}
