use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::evaluators::responses::EvaluatorListResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::EvaluatorService;

pub async fn handle_list_evaluators(
    service: &EvaluatorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_evaluators().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EvaluatorListResponse { items },
            "Avaliadores listados",
        ))),
        Err(e) => {
            tracing::error!("Failed to list evaluators: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar os avaliadores",
                )),
            )
        }
    }
}
