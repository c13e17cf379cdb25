use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::projects::requests::{CreateProjectRequest, ProjectListQuery};
use crate::models::users::entities::UserRole;
use crate::services::ProjectService;
use crate::utils::SafeIDI64;

// Instância global preguiçosa do ProjectService
static PROJECT_SERVICE: Lazy<ProjectService> = Lazy::new(ProjectService::new_lazy);

pub async fn list_projects(
    req: HttpRequest,
    query: web::Query<ProjectListQuery>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.list_projects(query.into_inner(), &req).await
}

pub async fn create_project(
    req: HttpRequest,
    body: web::Json<CreateProjectRequest>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.create_project(body.into_inner(), &req).await
}

pub async fn get_project(req: HttpRequest, project_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.get_project(project_id.0, &req).await
}

pub async fn delete_project(req: HttpRequest, project_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.delete_project(project_id.0, &req).await
}

// Configuração das rotas
pub fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/projects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // Leitura aberta a qualquer usuário autenticado
                    .route(web::get().to(list_projects))
                    // Escrita restrita à administração
                    .route(
                        web::post()
                            .to(create_project)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_project))
                    .route(
                        web::delete()
                            .to(delete_project)
                            .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
                    ),
            ),
    );
}
