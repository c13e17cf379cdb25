use serde::Deserialize;
use ts_rs::TS;

// Filtro da listagem de avaliações do avaliador
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/assessment.ts")]
pub struct AssessmentListQuery {
    /// Ano do evento; na ausência vale o ano padrão configurado
    pub year: Option<i32>,
}
