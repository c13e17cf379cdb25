use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ProjectService;

pub async fn handle_delete_project(
    service: &ProjectService,
    project_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_project(project_id).await {
        Ok(true) => {
            tracing::info!("Project {} soft-deleted", project_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Trabalho removido")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Trabalho não encontrado",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete project {}: {}", project_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao remover o trabalho",
                )),
            )
        }
    }
}
