use serde::Serialize;
use ts_rs::TS;

/// Agregados do painel, no formato que os cards do dashboard consomem
#[derive(Debug, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../web/src/types/generated/dashboard.ts")]
pub struct DashboardStatsResponse {
    pub total_projetos: i64,
    pub trabalhos_para_avaliar: i64,
    pub trabalhos_avaliados: i64,
    pub avaliadores_ativos: i64,
    /// % de trabalhos com ao menos uma avaliação respondida
    pub progresso_geral_inicial: i64,
    /// % de trabalhos com todas as avaliações respondidas
    pub progresso_geral: i64,
    pub status_avaliacoes: StatusAvaliacoes,
}

/// Contadores "faltam N avaliações"
#[derive(Debug, Default, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../web/src/types/generated/dashboard.ts")]
pub struct StatusAvaliacoes {
    pub faltam_1_avaliacao: i64,
    pub faltam_2_avaliacoes: i64,
    pub faltam_3_avaliacoes: i64,
}
