use std::borrow::Cow;
use validator::ValidationError;
use crate::validators::*;

/// Calendar display colors are stored as `#rrggbb`.
pub fn hex_color_valid(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color.chars().skip(1).all(|c| c.is_ascii_hexdigit());
    if !valid {
        let mut validation_error =
            create_validation_error("color_must_be_hex", "Color must be a hex code such as #007bff");
        validation_error.add_param(Cow::from("color"), &color);
        return Err(validation_error);
    }
    Ok(())
}

#[test]
fn hex_colors() {
    assert!(hex_color_valid("#007bff").is_ok());
    assert!(hex_color_valid("#AABBCC").is_ok());
    assert!(hex_color_valid("007bff").is_err());
    assert!(hex_color_valid("#07bff").is_err());
    assert!(hex_color_valid("#00zzff").is_err());
}
