//! Custom field validators used by the `#[validate(custom(...))]` attributes.
//!
//! PostgreSQL text columns cannot hold U+0000, so every free-text field is
//! checked for it here instead of failing at insert time.

use std::borrow::Cow;

use breedbook_core::breed::{is_blank, MAX_NAME_LEN};
use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

/// Free text: anything the database can store.
pub fn text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(error("nul_character", "must not contain NUL characters"));
    }
    Ok(())
}

/// Breed and sub-breed names: storable text that is not empty once trimmed.
pub fn name(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(error("blank", "must not be blank"));
    }
    text(value)
}

/// Every non-blank sub-breed name must be storable and fit the column once
/// trimmed.
///
/// Blank entries are allowed here; they are dropped before insert.
pub fn sub_breed_names(names: &[String]) -> Result<(), ValidationError> {
    for name in names {
        text(name)?;
        if name.trim().chars().count() > MAX_NAME_LEN {
            let mut err = error("length", "sub-breed names must be at most 255 characters");
            err.add_param(Cow::from("max"), &MAX_NAME_LEN);
            return Err(err);
        }
    }
    Ok(())
}
