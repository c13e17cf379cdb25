use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::questions::responses::QuestionListResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::QuestionService;

pub async fn handle_list_questions(
    service: &QuestionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_questions().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionListResponse { items },
            "Perguntas listadas",
        ))),
        Err(e) => {
            tracing::error!("Failed to list questions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar as perguntas",
                )),
            )
        }
    }
}
