use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::assessments::responses::AssessmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AssessmentService;

pub async fn handle_list_my_assessments(
    service: &AssessmentService,
    query: AssessmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let year = query.year.unwrap_or(config.event.default_year);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Acesso não autorizado, faça login",
        )));
    };

    let evaluator = match storage.get_evaluator_by_user_id(user_id).await {
        Ok(Some(evaluator)) => evaluator,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "O usuário autenticado não é um avaliador",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load evaluator for user {}: {}", user_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar as avaliações",
                )),
            );
        }
    };

    match storage
        .list_assessments_by_evaluator(evaluator.id, year)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssessmentListResponse { items },
            "Avaliações listadas",
        ))),
        Err(e) => {
            tracing::error!(
                "Failed to list assessments for evaluator {}: {}",
                evaluator.id,
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar as avaliações",
                )),
            )
        }
    }
}
