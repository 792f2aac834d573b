// src/models/validators.rs

// Validações customizadas usadas pelos payloads via `#[validate(custom(...))]`.

use rust_decimal::Decimal;
use validator::ValidationError;

// NUMERIC(10, 2)
const MAX_MONEY_SCALE: u32 = 2;
const MAX_MONEY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2); // 99999999.99

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Valor monetário: não negativo e com no máximo 2 casas decimais.
pub fn validate_money(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = error("range", "O valor não pode ser negativo.");
        err.add_param("min".into(), &0.0);
        return Err(err);
    }
    if val.normalize().scale() > MAX_MONEY_SCALE {
        return Err(error("decimal_places", "O valor deve ter no máximo 2 casas decimais."));
    }
    if *val > MAX_MONEY {
        return Err(error("range", "O valor excede o máximo permitido."));
    }
    Ok(())
}

/// Como `validate_money`, mas exige valor maior que zero.
pub fn validate_positive_money(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = error("range", "O valor deve ser maior que zero.");
        err.add_param("exclusive_min".into(), &0.0);
        return Err(err);
    }
    validate_money(val)
}

/// CPF sem pontuação: exatamente 11 dígitos.
pub fn validate_cpf(val: &str) -> Result<(), ValidationError> {
    if val.len() == 11 && val.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(error("cpf", "O CPF deve ter 11 dígitos, sem pontuação."))
    }
}

/// CNPJ com ou sem pontuação (`12.345.678/0001-90`): 14 dígitos.
pub fn validate_tax_id(val: &str) -> Result<(), ValidationError> {
    let only_allowed = val.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-'));
    let digits = val.chars().filter(|c| c.is_ascii_digit()).count();
    if only_allowed && digits == 14 {
        Ok(())
    } else {
        Err(error("tax_id", "O CNPJ deve ter 14 dígitos."))
    }
}

/// CNPJ como é gravado: só os dígitos. `12.345.678/0001-90` e
/// `12345678000190` são o mesmo fornecedor.
pub fn normalize_tax_id(val: &str) -> String {
    val.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn money_accepts_zero_and_cents() {
        assert!(validate_money(&Decimal::ZERO).is_ok());
        assert!(validate_money(&dec!(12.50)).is_ok());
        assert!(validate_money(&dec!(12.500)).is_ok());
        assert!(validate_money(&dec!(99999999.99)).is_ok());
    }

    #[test]
    fn money_rejects_negative_fractions_and_overflow() {
        assert_eq!(validate_money(&dec!(-0.01)).unwrap_err().code, "range");
        assert_eq!(validate_money(&dec!(1.005)).unwrap_err().code, "decimal_places");
        assert_eq!(validate_money(&dec!(100000000.00)).unwrap_err().code, "range");
    }

    #[test]
    fn positive_money_rejects_zero() {
        assert!(validate_positive_money(&Decimal::ZERO).is_err());
        assert!(validate_positive_money(&dec!(0.01)).is_ok());
    }

    #[test]
    fn cpf_must_be_eleven_digits() {
        assert!(validate_cpf("12345678901").is_ok());
        assert!(validate_cpf("123.456.789-01").is_err());
        assert!(validate_cpf("1234567890").is_err());
    }

    #[test]
    fn tax_id_accepts_punctuation() {
        assert!(validate_tax_id("12.345.678/0001-90").is_ok());
        assert!(validate_tax_id("12345678000190").is_ok());
        assert!(validate_tax_id("12.345.678/0001").is_err());
        assert!(validate_tax_id("12a45678000190").is_err());
    }

    #[test]
    fn tax_id_is_stored_as_digits() {
        assert_eq!(normalize_tax_id("70.117.290/0673-88"), "70117290067388");
        assert_eq!(normalize_tax_id("70117290067388"), "70117290067388");
    }
}
