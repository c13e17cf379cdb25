use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::projects::requests::CreateProjectRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ProjectService;

pub async fn handle_create_project(
    service: &ProjectService,
    create_request: CreateProjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "O título do trabalho é obrigatório",
        )));
    }
    if create_request.year < 2000 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Ano da edição inválido",
        )));
    }

    match storage.create_project(create_request).await {
        Ok(project) => {
            tracing::info!("Project {} created (year {})", project.id, project.year);
            Ok(HttpResponse::Created().json(ApiResponse::success(project, "Trabalho criado")))
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao criar o trabalho",
                )),
            )
        }
    }
}
