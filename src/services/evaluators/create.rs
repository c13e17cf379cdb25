//! Criação de avaliador
//!
//! Sorteia um PIN de 4 dígitos livre (o PIN é único na tabela inteira,
//! tombstones incluídos), deriva um nome de login a partir do nome e cria
//! usuário, avaliador, áreas e avaliações em uma transação no storage.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SaipruError;
use crate::models::evaluators::requests::CreateEvaluatorRequest;
use crate::models::users::entities::{NewUser, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{generate_random_password, hash_password};
use crate::utils::pin::{PIN_GENERATION_ATTEMPTS, generate_pin};
use crate::utils::validate::validate_username;

use super::EvaluatorService;

// Deriva o nome de login a partir do nome do avaliador
fn derive_username(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let slug = if slug.len() < 3 {
        "avaliador".to_string()
    } else {
        slug.chars().take(24).collect()
    };
    format!("{}.{}", slug, generate_pin())
}

pub async fn handle_create_evaluator(
    service: &EvaluatorService,
    create_request: CreateEvaluatorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "O nome do avaliador é obrigatório",
        )));
    }

    // Sorteia um PIN livre
    let mut pin = None;
    for _ in 0..PIN_GENERATION_ATTEMPTS {
        let candidate = generate_pin();
        match storage.pin_exists(&candidate).await {
            Ok(false) => {
                pin = Some(candidate);
                break;
            }
            Ok(true) => continue,
            Err(e) => {
                tracing::error!("Failed to check PIN availability: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Falha ao criar o avaliador",
                    )),
                );
            }
        }
    }
    let Some(pin) = pin else {
        let err = SaipruError::pin_exhausted(format!(
            "nenhum PIN livre após {PIN_GENERATION_ATTEMPTS} tentativas"
        ));
        tracing::error!("Failed to allocate evaluator PIN: {}", err);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Não há PIN disponível, remova avaliadores antigos",
            )),
        );
    };

    // Deriva um nome de login livre
    let mut username = None;
    for _ in 0..8 {
        let candidate = derive_username(&create_request.name);
        if validate_username(&candidate).is_err() {
            continue;
        }
        match storage.get_user_by_username(&candidate).await {
            Ok(None) => {
                username = Some(candidate);
                break;
            }
            Ok(Some(_)) => continue,
            Err(e) => {
                tracing::error!("Failed to check username availability: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Falha ao criar o avaliador",
                    )),
                );
            }
        }
    }
    let Some(username) = username else {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Falha ao derivar o nome de login do avaliador",
            )),
        );
    };

    // O avaliador entra pelo PIN; a senha da conta é aleatória
    let password_hash = match hash_password(&generate_random_password(16)) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash evaluator password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao criar o avaliador",
                )),
            );
        }
    };

    let user = NewUser {
        username,
        password_hash,
        role: UserRole::Evaluator,
        display_name: Some(create_request.name.trim().to_string()),
    };

    match storage
        .create_evaluator(
            user,
            pin,
            create_request.category_ids,
            create_request.project_ids,
        )
        .await
    {
        Ok(evaluator) => {
            tracing::info!("Evaluator {} created", evaluator.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(evaluator, "Avaliador criado")))
        }
        Err(e) => {
            tracing::error!("Failed to create evaluator: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao criar o avaliador",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_username_from_name() {
        let username = derive_username("Maria da Silva");
        assert!(username.starts_with("maria.da.silva."));
        assert!(validate_username(&username).is_ok());
    }

    #[test]
    fn test_derive_username_strips_invalid_chars() {
        let username = derive_username("José Ângelo!");
        // caracteres não ASCII caem fora, o sufixo numérico permanece
        assert!(validate_username(&username).is_ok());
    }

    #[test]
    fn test_derive_username_short_name_falls_back() {
        let username = derive_username("Li");
        assert!(username.starts_with("avaliador."));
    }
}
