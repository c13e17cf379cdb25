use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::responses::requests::SubmitResponsesRequest;
use crate::services::ResponseService;

// Instância global preguiçosa do ResponseService
static RESPONSE_SERVICE: Lazy<ResponseService> = Lazy::new(ResponseService::new_lazy);

pub async fn submit_responses(
    req: HttpRequest,
    body: web::Json<SubmitResponsesRequest>,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE.submit_responses(&req, body).await
}

// Configuração das rotas
pub fn configure_response_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/responses")
            // A posse da avaliação é verificada no serviço
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(submit_responses)),
    );
}
