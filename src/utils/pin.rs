use rand::Rng;

/// Quantidade de tentativas de sorteio antes de desistir por colisão
pub const PIN_GENERATION_ATTEMPTS: u32 = 32;

/// Sorteia um PIN numérico de 4 dígitos, com zeros à esquerda ("0042")
pub fn generate_pin() -> String {
    let n: u32 = rand::rng().random_range(0..10_000);
    format!("{n:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_has_four_digits() {
        for _ in 0..100 {
            let pin = generate_pin();
            assert_eq!(pin.len(), 4);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
