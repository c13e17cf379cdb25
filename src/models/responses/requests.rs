use serde::Deserialize;
use ts_rs::TS;

// Envio do questionário completo de uma avaliação
//
// A gravação substitui todas as respostas anteriores da avaliação
// (apaga-e-insere em uma única transação), nunca um upsert incremental.
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/response.ts")]
pub struct SubmitResponsesRequest {
    /// Id da avaliação
    pub assessment: i64,
    pub responses: Vec<ResponseItem>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/response.ts")]
pub struct ResponseItem {
    pub question_id: i64,
    /// 1 = múltipla escolha (value numérico), 2 = texto (value string)
    #[serde(rename = "type")]
    pub question_type: i32,
    pub value: ResponseValue,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../web/src/types/generated/response.ts")]
pub enum ResponseValue {
    Score(i32),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_payload() {
        let json = r#"{
            "assessment": 7,
            "responses": [
                {"question_id": 1, "type": 1, "value": 8},
                {"question_id": 2, "type": 2, "value": "ótima apresentação"}
            ]
        }"#;
        let req: SubmitResponsesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.assessment, 7);
        assert_eq!(req.responses.len(), 2);
        assert!(matches!(req.responses[0].value, ResponseValue::Score(8)));
        assert!(matches!(req.responses[1].value, ResponseValue::Text(_)));
    }
}
