use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Avaliador (vinculado 1:1 a um usuário)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/evaluator.ts")]
pub struct Evaluator {
    pub id: i64,
    pub user_id: i64,
    /// PIN de 4 dígitos usado no login do app
    pub pin: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
