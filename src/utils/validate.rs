use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

/// Nome de login: 3 a 32 caracteres, letras, números, ponto, hífen ou
/// sublinhado
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 32 {
        return Err("O nome de usuário deve ter entre 3 e 32 caracteres");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("O nome de usuário só pode conter letras, números, ponto, hífen ou sublinhado");
    }
    Ok(())
}

/// Senha: ao menos 8 caracteres com letra e número
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("A senha deve ter ao menos 8 caracteres");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("A senha deve conter ao menos uma letra");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("A senha deve conter ao menos um número");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("maria.silva").is_ok());
        assert!(validate_username("joao_2026").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("nome com espaço").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Fecitel2026").is_ok());
    }

    #[test]
    fn test_invalid_password() {
        assert!(validate_password("curta1").is_err());
        assert!(validate_password("semnumero").is_err());
        assert!(validate_password("12345678").is_err());
    }
}
