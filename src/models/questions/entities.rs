use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Tipo da pergunta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../web/src/types/generated/question.ts")]
pub enum QuestionType {
    MultipleChoice, // 1 - nota de 0..number_alternatives
    Text,           // 2 - resposta dissertativa
}

impl QuestionType {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(QuestionType::MultipleChoice),
            2 => Some(QuestionType::Text),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            QuestionType::MultipleChoice => 1,
            QuestionType::Text => 2,
        }
    }
}

// Pergunta do questionário de avaliação
//
// scientific_text e technological_text são as duas variantes do enunciado;
// o app exibe uma delas conforme o tipo do trabalho.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub scientific_text: String,
    pub technological_text: String,
    pub question_type: QuestionType,
    pub number_alternatives: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_roundtrip() {
        assert_eq!(QuestionType::from_i32(1), Some(QuestionType::MultipleChoice));
        assert_eq!(QuestionType::from_i32(2), Some(QuestionType::Text));
        assert_eq!(QuestionType::from_i32(3), None);
        assert_eq!(QuestionType::MultipleChoice.as_i32(), 1);
        assert_eq!(QuestionType::Text.as_i32(), 2);
    }
}
