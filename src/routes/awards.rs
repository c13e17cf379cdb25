use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::awards::requests::AwardReportQuery;
use crate::models::users::entities::UserRole;
use crate::services::AwardService;
use crate::utils::SafeIDI64;

// Instância global preguiçosa do AwardService
static AWARD_SERVICE: Lazy<AwardService> = Lazy::new(AwardService::new_lazy);

pub async fn list_awards(req: HttpRequest) -> ActixResult<HttpResponse> {
    AWARD_SERVICE.list_awards(&req).await
}

pub async fn get_report(
    req: HttpRequest,
    award_id: SafeIDI64,
    query: web::Query<AwardReportQuery>,
) -> ActixResult<HttpResponse> {
    AWARD_SERVICE
        .get_report(award_id.0, query.into_inner(), &req)
        .await
}

// Configuração das rotas
pub fn configure_award_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/awards")
            .wrap(middlewares::RequireJWT)
            // Lista aberta a qualquer usuário autenticado
            .route("", web::get().to(list_awards))
            // Relatório restrito à administração
            .service(
                web::resource("/{id}/report")
                    .route(web::get().to(get_report))
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
            ),
    );
}
