//! Tratamento unificado de erros
//!
//! Usa uma macro para gerar o enum de erros com código estável e nome do tipo.

use std::fmt;

/// Macro que define os tipos de erro do sistema
///
/// Gera:
/// - o enum
/// - code() - código do erro
/// - error_type() - nome do tipo de erro
/// - message() - detalhe do erro
/// - construtores de conveniência
macro_rules! define_saipru_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SaipruError {
            $($variant(String),)*
        }

        impl SaipruError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(SaipruError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SaipruError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(SaipruError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SaipruError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SaipruError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_saipru_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    StoragePluginNotFound("E009", "Storage Plugin Not Found"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    PinExhausted("E013", "PIN Pool Exhausted"),
}

impl SaipruError {
    /// Saída colorida para o ambiente de desenvolvimento
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// Saída resumida
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SaipruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SaipruError {}

impl From<sea_orm::DbErr> for SaipruError {
    fn from(err: sea_orm::DbErr) -> Self {
        SaipruError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SaipruError {
    fn from(err: std::io::Error) -> Self {
        SaipruError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for SaipruError {
    fn from(err: serde_json::Error) -> Self {
        SaipruError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SaipruError {
    fn from(err: chrono::ParseError) -> Self {
        SaipruError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SaipruError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SaipruError::cache_connection("x").code(), "E001");
        assert_eq!(SaipruError::database_operation("x").code(), "E005");
        assert_eq!(SaipruError::not_found("x").code(), "E007");
        assert_eq!(SaipruError::authentication("x").code(), "E011");
        assert_eq!(SaipruError::pin_exhausted("x").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SaipruError::validation("x").error_type(),
            "Validation Error"
        );
        assert_eq!(
            SaipruError::pin_exhausted("x").error_type(),
            "PIN Pool Exhausted"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SaipruError::validation("entrada inválida");
        assert_eq!(err.message(), "entrada inválida");
    }

    #[test]
    fn test_format_simple() {
        let err = SaipruError::not_found("avaliação 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("avaliação 42"));
    }
}
