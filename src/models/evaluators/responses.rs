use serde::Serialize;
use ts_rs::TS;

use super::entities::Evaluator;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/evaluator.ts")]
pub struct EvaluatorWithName {
    #[serde(flatten)]
    pub evaluator: Evaluator,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/evaluator.ts")]
pub struct EvaluatorListResponse {
    pub items: Vec<EvaluatorWithName>,
}
