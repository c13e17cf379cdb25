use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::dashboard::requests::DashboardStatsQuery;
use crate::services::DashboardService;

// Instância global preguiçosa do DashboardService
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn get_stats(
    req: HttpRequest,
    query: web::Query<DashboardStatsQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_stats(query.into_inner(), &req).await
}

// Configuração das rotas
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            // Painel compartilhado entre administração e avaliadores
            .wrap(middlewares::RequireJWT)
            .route("/stats", web::get().to(get_stats)),
    );
}
