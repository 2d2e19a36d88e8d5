use serde::Deserialize;
use validator::Validate;

use super::{validate_access_token, validate_org_name, validate_template_name};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendTemplateMailDto {
    #[validate(email)]
    pub to: String,
    #[validate(custom(function = "validate_template_name"))]
    pub template_name: String,
    #[validate(length(min = 1, message = "displayname must not be empty."))]
    pub displayname: String,
    #[validate(custom(function = "validate_access_token"))]
    pub access_token: String,
    #[validate(custom(function = "validate_org_name"))]
    pub org_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(template_name: &str) -> SendTemplateMailDto {
        SendTemplateMailDto {
            to: "ada@mist.test".to_string(),
            template_name: template_name.to_string(),
            displayname: "ada".to_string(),
            access_token: "token".to_string(),
            org_name: None,
        }
    }

    #[test]
    fn accepts_registered_template() {
        assert!(dto("signInV1").validate().is_ok());
    }

    #[test]
    fn rejects_unregistered_template() {
        let errors = dto("SignInV1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("template_name"));
    }

    #[test]
    fn unknown_template_carries_message() {
        let errors = dto("orgInvitationV2").validate().unwrap_err();
        let field_errors = errors.field_errors();
        let error = &field_errors["template_name"][0];
        assert_eq!(error.message.as_deref(), Some("Unknown email template."));
    }

    #[test]
    fn rejects_token_that_is_not_url_safe() {
        let mut dto = dto("signInV1");
        dto.access_token = "a b onmouseover=alert(1)".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("access_token"));

        dto.access_token = "eyJhbGciOiJIUzI1NiJ9.e30.sig-_~".to_string();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_org_name_with_line_breaks() {
        let mut dto = dto("orgInvitationV1");
        dto.org_name = Some("Acme\r\nBcc: someone@else.test".to_string());
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("org_name"));

        dto.org_name = Some("<b>Acme</b>".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_bad_address() {
        let mut dto = dto("signUpV1");
        dto.to = "not-an-address".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("to"));
    }
}
