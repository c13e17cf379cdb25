//! Extratores de parâmetros de rota com resposta de erro padronizada
//!
//! O extrator padrão do actix devolve um corpo de texto puro quando o
//! segmento não é numérico; estes extratores devolvem o envelope JSON da
//! API.

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// Segmento de rota `{id}` validado como i64
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());

        ready(match parsed {
            Some(id) if id > 0 => Ok(SafeIDI64(id)),
            _ => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    "O identificador informado na rota é inválido",
                ));
                Err(InternalError::from_response("invalid id", response).into())
            }
        })
    }
}
