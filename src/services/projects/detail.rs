use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::projects::responses::ProjectDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::scoring;

use super::ProjectService;

pub async fn handle_get_project(
    service: &ProjectService,
    project_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let project = match storage.get_project_by_id(project_id).await {
        Ok(Some(project)) => project,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Trabalho não encontrado",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load project {}: {}", project_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao buscar o trabalho",
                )),
            );
        }
    };

    let final_note = match storage.list_scores_for_project(project_id).await {
        Ok(rows) => scoring::final_note(&rows),
        Err(e) => {
            tracing::error!("Failed to load scores for project {}: {}", project_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao calcular a nota do trabalho",
                )),
            );
        }
    };

    let response = ProjectDetailResponse {
        project,
        final_note,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Trabalho carregado")))
}
