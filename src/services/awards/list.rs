use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::awards::responses::AwardListResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AwardService;

pub async fn handle_list_awards(
    service: &AwardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_awards().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AwardListResponse { items },
            "Premiações listadas",
        ))),
        Err(e) => {
            tracing::error!("Failed to list awards: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar as premiações",
                )),
            )
        }
    }
}
