use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::services::AssessmentService;

// Instância global preguiçosa do AssessmentService
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

pub async fn list_my_assessments(
    req: HttpRequest,
    query: web::Query<AssessmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_my_assessments(query.into_inner(), &req)
        .await
}

// Configuração das rotas
pub fn configure_assessment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assessments")
            // A lista é recortada pelo avaliador autenticado no serviço
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_my_assessments)),
    );
}
