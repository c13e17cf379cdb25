//! Login do avaliador pelo PIN de 4 dígitos
//!
//! O PIN é o único segredo do app móvel; a rota fica atrás do limitador de
//! taxa. A resposta é o mesmo par de tokens do login da administração.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserStatus;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::PinLoginRequest, responses::LoginResponse},
};
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_pin_login(
    service: &AuthService,
    pin_request: PinLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let pin = pin_request.pin.trim();
    if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "O PIN deve ter exatamente 4 dígitos numéricos",
        )));
    }

    let evaluator = match storage.get_evaluator_by_pin(pin).await {
        Ok(Some(evaluator)) => evaluator,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, "PIN inválido")));
        }
        Err(e) => {
            tracing::error!("Failed to look up evaluator by PIN: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha no login",
                )),
            );
        }
    };

    let user = match storage.get_user_by_id(evaluator.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::error!(
                "Evaluator {} points to missing user {}",
                evaluator.id,
                evaluator.user_id
            );
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, "PIN inválido")));
        }
        Err(e) => {
            tracing::error!("Failed to load evaluator user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha no login",
                )),
            );
        }
    };

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Avaliador inativo",
        )));
    }

    let _ = storage.update_last_login(user.id).await;

    match user.generate_token_pair(None).await {
        Ok(token_pair) => {
            tracing::info!("Evaluator {} logged in via PIN", evaluator.id);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                user,
                created_at: chrono::Utc::now(),
            };

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login realizado")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha no login, não foi possível gerar o token",
                )),
            )
        }
    }
}
