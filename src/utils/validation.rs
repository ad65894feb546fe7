//! Validation helpers
//!
//! Custom validators used by the request DTOs, plus range checks shared
//! by the controllers.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Uppercase plates like "TRK-001-ZW" or "ABD 4821". Normalisation to
    /// uppercase happens before validation.
    static ref LICENSE_PLATE_RE: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9 \-]{2,18}[A-Z0-9]$").unwrap();

    /// Driver licence numbers: alphanumeric with optional dashes.
    static ref LICENSE_NUMBER_RE: Regex = Regex::new(r"^[A-Z0-9\-]{4,20}$").unwrap();
}

pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if LICENSE_PLATE_RE.is_match(&value.to_uppercase()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        Err(error)
    }
}

pub fn validate_license_number(value: &str) -> Result<(), ValidationError> {
    if LICENSE_NUMBER_RE.is_match(&value.to_uppercase()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("license_number");
        error.add_param("value".into(), &value.to_string());
        Err(error)
    }
}

/// Fuel levels are percentages.
pub fn fuel_level_in_range(level: Decimal) -> bool {
    level >= Decimal::ZERO && level <= Decimal::from(100u32)
}

/// Distances and costs must not be negative.
pub fn non_negative(value: Decimal) -> bool {
    value >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_license_plate_accepts_common_formats() {
        assert!(validate_license_plate("TRK-001-ZW").is_ok());
        assert!(validate_license_plate("abd 4821").is_ok());
        assert!(validate_license_plate("AE").is_err());
        assert!(validate_license_plate("BAD_PLATE!").is_err());
    }

    #[test]
    fn test_license_number_format() {
        assert!(validate_license_number("DL001234").is_ok());
        assert!(validate_license_number("dl-00-1234").is_ok());
        assert!(validate_license_number("x").is_err());
        assert!(validate_license_number("has spaces").is_err());
    }

    #[test]
    fn test_fuel_level_bounds() {
        assert!(fuel_level_in_range(dec!(0)));
        assert!(fuel_level_in_range(dec!(100)));
        assert!(!fuel_level_in_range(dec!(100.1)));
        assert!(!fuel_level_in_range(dec!(-1)));
    }
}
