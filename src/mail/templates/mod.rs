use crate::app::envy::Envy;

use super::enums::email_template_name::EmailTemplateName;

pub mod org_invitation_v1_template;
pub mod sign_in_v1_template;
pub mod sign_up_v1_template;

/// Values interpolated into a rendered template.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub displayname: String,
    pub access_token: String,
    pub org_name: Option<String>,
}

/// Link under the frontend with the token as its last, percent-encoded path segment.
pub fn token_url(envy: &Envy, path: &str, access_token: &str) -> String {
    format!(
        "{}/{}/{}",
        envy.frontend_url,
        path,
        urlencoding::encode(access_token)
    )
}

/// Returns `(subject, html_body)`. Context values are HTML-escaped in the body;
/// the subject is a plain-text header.
pub fn render_template(
    name: EmailTemplateName,
    context: &TemplateContext,
    envy: &Envy,
) -> (String, String) {
    match name {
        EmailTemplateName::SignUpV1 => sign_up_v1_template::sign_up_v1_template(context, envy),
        EmailTemplateName::SignInV1 => sign_in_v1_template::sign_in_v1_template(context, envy),
        EmailTemplateName::OrgInvitationV1 => {
            org_invitation_v1_template::org_invitation_v1_template(context, envy)
        }
    }
}
