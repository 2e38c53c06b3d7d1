use std::borrow::Cow;
use validator::ValidationError;
use crate::validators::*;

/// Phone numbers are stored in the `+999999999` format, 9 to 15 digits.
pub fn phone_number_valid(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let digits = digits.strip_prefix('1').unwrap_or(digits);
    let valid = (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    if !valid {
        let mut validation_error = create_validation_error(
            "phone_number_invalid",
            "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed",
        );
        validation_error.add_param(Cow::from("phone"), &phone);
        return Err(validation_error);
    }
    Ok(())
}

#[test]
fn phone_numbers() {
    assert!(phone_number_valid("+12065551234").is_ok());
    assert!(phone_number_valid("2065551234").is_ok());
    assert!(phone_number_valid("not-a-phone").is_err());
    assert!(phone_number_valid("+1206").is_err());
}
