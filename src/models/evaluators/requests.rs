use serde::Deserialize;
use ts_rs::TS;

// Criação de avaliador (administração)
//
// Cria o usuário vinculado, sorteia um PIN livre e gera uma avaliação para
// cada trabalho selecionado.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/evaluator.ts")]
pub struct CreateEvaluatorRequest {
    pub name: String,
    /// Áreas de atuação
    #[serde(default)]
    pub category_ids: Vec<i64>,
    /// Trabalhos que este avaliador vai avaliar
    #[serde(default)]
    pub project_ids: Vec<i64>,
}
