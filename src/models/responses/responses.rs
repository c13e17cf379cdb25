use serde::Serialize;
use ts_rs::TS;

/// Confirmação da gravação do questionário
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/response.ts")]
pub struct SubmitResponsesResponse {
    pub assessment: i64,
    /// Quantidade de respostas gravadas nesta submissão
    pub saved: usize,
}
