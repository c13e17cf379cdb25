pub mod error_code;
pub mod pagination;
pub mod response;

/// Momento em que o processo subiu, guardado no app data
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
