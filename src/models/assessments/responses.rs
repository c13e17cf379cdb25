use serde::Serialize;
use ts_rs::TS;

use super::entities::AssessmentWithProject;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/assessment.ts")]
pub struct AssessmentListResponse {
    pub items: Vec<AssessmentWithProject>,
}
