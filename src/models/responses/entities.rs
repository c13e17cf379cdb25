use serde::Serialize;
use ts_rs::TS;

// Resposta pronta para inserção (já validada contra o tipo da pergunta)
#[derive(Debug, Clone)]
pub struct NewResponse {
    pub question_id: i64,
    pub score: Option<i32>,
    pub response: Option<String>,
}

/// Linha de nota de múltipla escolha, insumo do agregador de notas.
/// Só contém respostas de perguntas ativas de trabalhos ativos.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/response.ts")]
pub struct ScoreRow {
    pub project_id: i64,
    pub question_id: i64,
    pub score: i32,
}
