use serde::Serialize;
use ts_rs::TS;

use super::entities::Question;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/question.ts")]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
}
