use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluators::requests::CreateEvaluatorRequest;
use crate::models::users::entities::UserRole;
use crate::services::EvaluatorService;

// Instância global preguiçosa do EvaluatorService
static EVALUATOR_SERVICE: Lazy<EvaluatorService> = Lazy::new(EvaluatorService::new_lazy);

pub async fn list_evaluators(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATOR_SERVICE.list_evaluators(&req).await
}

pub async fn create_evaluator(
    req: HttpRequest,
    body: web::Json<CreateEvaluatorRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATOR_SERVICE
        .create_evaluator(body.into_inner(), &req)
        .await
}

// Configuração das rotas
pub fn configure_evaluator_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluators")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin))
                    .route("", web::get().to(list_evaluators))
                    .route("", web::post().to(create_evaluator)),
            ),
    );
}
