mod hex_color_validator;
mod phone_number_validator;
mod start_date_before_end_date_validator;

pub use self::hex_color_validator::hex_color_valid;
pub use self::phone_number_validator::phone_number_valid;
pub use self::start_date_before_end_date_validator::start_date_valid;
use validator::*;

pub fn append_validation_error(
    validation_errors: Result<(), ValidationErrors>,
    field: &'static str,
    validation_error: Result<(), ValidationError>,
) -> Result<(), ValidationErrors> {
    if let Err(validation_error) = validation_error {
        let mut validation_errors = match validation_errors {
            Ok(_) => ValidationErrors::new(),
            Err(validation_errors) => validation_errors,
        };
        validation_errors.add(field, validation_error);
        Err(validation_errors)
    } else {
        validation_errors
    }
}

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(message.into());
    validation_error
}
