use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

use super::enums::email_template_name::is_valid_template_name;

pub mod send_template_mail_dto;

lazy_static! {
    pub static ref ACCESS_TOKEN_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.~-]+$").unwrap();
}

lazy_static! {
    pub static ref ORG_NAME_REGEX: Regex = Regex::new(r"^[^\p{Cc}]{1,64}$").unwrap();
}

pub fn validate_template_name(value: &str) -> Result<(), ValidationError> {
    match is_valid_template_name(value) {
        true => Ok(()),
        false => {
            let mut error = ValidationError::new("template_name_validation");
            error.message = Some(Cow::from("Unknown email template."));
            Err(error)
        }
    }
}

pub fn validate_access_token(value: &str) -> Result<(), ValidationError> {
    match ACCESS_TOKEN_REGEX.is_match(value) {
        true => Ok(()),
        false => Err(ValidationError::new("access_token_validation")),
    }
}

pub fn validate_org_name(value: &str) -> Result<(), ValidationError> {
    match ORG_NAME_REGEX.is_match(value) {
        true => Ok(()),
        false => Err(ValidationError::new("org_name_validation")),
    }
}
