//! Utilidades de validación
//!
//! Este módulo contiene los validadores de formato de los formularios
//! y helpers de presencia de campos.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Algo@algo.algo, anclado sólo al inicio
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap();
    /// Sólo dígitos decimales (Unicode), al menos uno
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Validar formato de email
pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validar formato de teléfono (sólo dígitos, sin límite de longitud)
pub fn validate_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Un campo de texto se considera ausente si está vacío o sólo tiene espacios
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Devuelve true si alguno de los campos requeridos falta
pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| is_blank(v))
}

/// Mayor importe que cabe en NUMERIC(10,2)
pub fn max_fee_amount() -> Decimal {
    Decimal::new(99_999_999_99, 2)
}

/// Validar un importe de tasa: no negativo y dentro de NUMERIC(10,2)
pub fn validate_fee_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("Amount must not be negative.".into());
        return Err(error);
    }
    if value.round_dp(2) > max_fee_amount() {
        let mut error = ValidationError::new("range");
        error.add_param("value".into(), &value.to_string());
        error.add_param("max".into(), &max_fee_amount().to_string());
        error.message = Some("Amount is too large.".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("test@example.co.uk"));
        assert!(!validate_email("abc"));
        assert!(!validate_email("a@bcom"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
    }

    #[test]
    fn test_validate_email_only_anchored_at_start() {
        // Texto posterior a una coincidencia válida se acepta
        assert!(validate_email("a@b.com@x"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("12345"));
        assert!(validate_phone("0"));
        assert!(validate_phone("123456789012345678901234567890"));
        assert!(!validate_phone("123-45"));
        assert!(!validate_phone("+3312345"));
        assert!(!validate_phone("123 45"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_validate_phone_accepts_unicode_digits() {
        assert!(validate_phone("١٢٣"));
        assert!(validate_phone("０１２"));
        assert!(!validate_phone("١٢٣-٤"));
    }

    #[test]
    fn test_blank_fields() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("x"));
        assert!(any_blank(&["a", "", "c"]));
        assert!(!any_blank(&["a", "b"]));
    }

    #[test]
    fn test_validate_fee_amount() {
        assert!(validate_fee_amount(&Decimal::from_str("10.50").unwrap()).is_ok());
        assert!(validate_fee_amount(&Decimal::ZERO).is_ok());
        assert!(validate_fee_amount(&Decimal::from_str("99999999.99").unwrap()).is_ok());
        assert!(validate_fee_amount(&Decimal::from_str("-0.01").unwrap()).is_err());
        assert!(validate_fee_amount(&Decimal::from_str("100000000").unwrap()).is_err());
    }
}
