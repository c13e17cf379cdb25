use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::projects::requests::ProjectListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::ProjectService;

pub async fn handle_list_projects(
    service: &ProjectService,
    query: ProjectListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let year = query.year.unwrap_or(config.event.default_year);

    match storage.list_projects_with_pagination(year, query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Trabalhos listados")))
        }
        Err(e) => {
            tracing::error!("Failed to list projects for year {}: {}", year, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao listar os trabalhos",
                )),
            )
        }
    }
}
