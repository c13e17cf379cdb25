use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use crate::middlewares::RequireJWT;
use crate::models::questions::entities::{Question, QuestionType};
use crate::models::responses::entities::NewResponse;
use crate::models::responses::requests::{ResponseItem, ResponseValue, SubmitResponsesRequest};
use crate::models::responses::responses::SubmitResponsesResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ResponseService;

pub async fn handle_submit_responses(
    service: &ResponseService,
    request: &HttpRequest,
    payload: SubmitResponsesRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Acesso não autorizado, faça login",
        )));
    };

    // Avaliações só existem amarradas a um avaliador, então um admin
    // também precisa ser dono da avaliação para gravar respostas.
    let assessment = match storage.get_assessment_by_id(payload.assessment).await {
        Ok(Some(assessment)) => assessment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssessmentNotFound,
                "Avaliação não encontrada",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load assessment {}: {}", payload.assessment, e);
            return Ok(internal_error());
        }
    };

    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    if !is_admin {
        let owns = match storage.get_evaluator_by_user_id(user_id).await {
            Ok(Some(evaluator)) => evaluator.id == assessment.evaluator_id,
            Ok(None) => false,
            Err(e) => {
                tracing::error!("Failed to load evaluator for user {}: {}", user_id, e);
                return Ok(internal_error());
            }
        };
        if !owns {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Esta avaliação pertence a outro avaliador",
            )));
        }
    }

    let questions = match storage.list_questions().await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!("Failed to load questions: {}", e);
            return Ok(internal_error());
        }
    };
    let questions: HashMap<i64, Question> =
        questions.into_iter().map(|q| (q.id, q)).collect();

    let mut new_responses = Vec::with_capacity(payload.responses.len());
    for item in &payload.responses {
        match validate_item(item, &questions) {
            Ok(response) => new_responses.push(response),
            Err(message) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    message,
                )));
            }
        }
    }

    match storage
        .replace_assessment_responses(assessment.id, new_responses)
        .await
    {
        Ok(saved) => {
            tracing::info!(
                "Responses replaced for assessment {} ({} rows)",
                assessment.id,
                saved
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitResponsesResponse {
                    assessment: assessment.id,
                    saved,
                },
                "Respostas gravadas",
            )))
        }
        Err(e) => {
            tracing::error!(
                "Failed to replace responses for assessment {}: {}",
                assessment.id,
                e
            );
            Ok(internal_error())
        }
    }
}

// Valida uma resposta contra a pergunta correspondente
fn validate_item(
    item: &ResponseItem,
    questions: &HashMap<i64, Question>,
) -> Result<NewResponse, String> {
    let Some(question) = questions.get(&item.question_id) else {
        return Err(format!("Pergunta {} não existe", item.question_id));
    };

    let Some(declared) = QuestionType::from_i32(item.question_type) else {
        return Err(format!(
            "Tipo de pergunta inválido na resposta da pergunta {}",
            item.question_id
        ));
    };
    if declared != question.question_type {
        return Err(format!(
            "Tipo enviado não corresponde ao tipo da pergunta {}",
            item.question_id
        ));
    }

    match (question.question_type, &item.value) {
        (QuestionType::MultipleChoice, ResponseValue::Score(score)) => {
            if *score < 0 || *score > question.number_alternatives {
                return Err(format!(
                    "Nota fora do intervalo permitido para a pergunta {}",
                    item.question_id
                ));
            }
            Ok(NewResponse {
                question_id: question.id,
                score: Some(*score),
                response: None,
            })
        }
        (QuestionType::Text, ResponseValue::Text(text)) => Ok(NewResponse {
            question_id: question.id,
            score: None,
            response: Some(text.clone()),
        }),
        _ => Err(format!(
            "Valor incompatível com o tipo da pergunta {}",
            item.question_id
        )),
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Falha ao gravar as respostas",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, question_type: QuestionType, alternatives: i32) -> Question {
        Question {
            id,
            scientific_text: format!("Pergunta {id}"),
            technological_text: format!("Pergunta {id}"),
            question_type,
            number_alternatives: alternatives,
        }
    }

    fn question_map() -> HashMap<i64, Question> {
        [
            (1, question(1, QuestionType::MultipleChoice, 10)),
            (2, question(2, QuestionType::Text, 0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_validate_score_within_range() {
        let questions = question_map();
        let item = ResponseItem {
            question_id: 1,
            question_type: 1,
            value: ResponseValue::Score(8),
        };
        let response = validate_item(&item, &questions).unwrap();
        assert_eq!(response.score, Some(8));
        assert!(response.response.is_none());
    }

    #[test]
    fn test_validate_score_out_of_range() {
        let questions = question_map();
        let item = ResponseItem {
            question_id: 1,
            question_type: 1,
            value: ResponseValue::Score(11),
        };
        assert!(validate_item(&item, &questions).is_err());
    }

    #[test]
    fn test_validate_text_response() {
        let questions = question_map();
        let item = ResponseItem {
            question_id: 2,
            question_type: 2,
            value: ResponseValue::Text("comentário".to_string()),
        };
        let response = validate_item(&item, &questions).unwrap();
        assert_eq!(response.response.as_deref(), Some("comentário"));
        assert!(response.score.is_none());
    }

    #[test]
    fn test_validate_rejects_unknown_question() {
        let questions = question_map();
        let item = ResponseItem {
            question_id: 99,
            question_type: 1,
            value: ResponseValue::Score(1),
        };
        assert!(validate_item(&item, &questions).is_err());
    }

    #[test]
    fn test_validate_rejects_type_mismatch() {
        let questions = question_map();
        let item = ResponseItem {
            question_id: 1,
            question_type: 2,
            value: ResponseValue::Text("texto".to_string()),
        };
        assert!(validate_item(&item, &questions).is_err());
    }
}
