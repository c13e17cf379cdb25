use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Códigos de negócio retornados no envelope da API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    InvalidParameter = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,
    TokenExpired = 40102,

    PermissionDenied = 40300,

    NotFound = 40400,
    AssessmentNotFound = 40401,

    TooManyRequests = 42900,

    InternalServerError = 50000,
}
