use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::QuestionService;

// Instância global preguiçosa do QuestionService
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

// Configuração das rotas
pub fn configure_question_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            // Qualquer usuário autenticado pode ler o questionário
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_questions)),
    );
}
