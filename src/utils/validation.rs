//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada, en particular el formato canónico de matrícula.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Dos letras, dos dígitos, una o dos letras, cuatro dígitos (ej: TN07CV7077)
    static ref PLATE_REGEX: Regex =
        Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}$").expect("regex de matrícula inválida");
}

/// Normalizar una matrícula antes de cualquier lookup
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// Validar el formato canónico de matrícula
///
/// La matrícula debe estar normalizada (mayúsculas) antes de validar.
pub fn validate_plate(plate: &str) -> Result<(), ValidationError> {
    if !PLATE_REGEX.is_match(plate) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &plate.to_string());
        error.add_param("format".into(), &"AA00A0000 / AA00AA0000".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plate_accepts_canonical_formats() {
        assert!(validate_plate("TN07CV7077").is_ok());
        assert!(validate_plate("KA05A1234").is_ok());
        assert!(validate_plate("MH12AB0001").is_ok());
    }

    #[test]
    fn test_validate_plate_rejects_malformed_values() {
        assert!(validate_plate("").is_err());
        assert!(validate_plate("1234567890").is_err());
        assert!(validate_plate("TN7CV7077").is_err());
        assert!(validate_plate("TN07CVX70777").is_err());
        assert!(validate_plate("TN07ABC7077").is_err());
        assert!(validate_plate("tn07cv7077").is_err());
    }

    #[test]
    fn test_normalize_plate_uppercases_and_trims() {
        assert_eq!(normalize_plate(" tn07cv7077 "), "TN07CV7077");
        assert!(validate_plate(&normalize_plate("tn07cv7077")).is_ok());
    }
}
