use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/dashboard.ts")]
pub struct DashboardStatsQuery {
    /// Ano da edição; quando ausente usa o ano padrão configurado
    pub year: Option<i32>,
}
