use handlebars::html_escape;

use crate::app::envy::Envy;

use super::{token_url, TemplateContext};

pub fn org_invitation_v1_template(context: &TemplateContext, envy: &Envy) -> (String, String) {
    let url = html_escape(&token_url(envy, "orgs/invitations", &context.access_token));
    let app_name = html_escape(&envy.app_name);
    let org_name = context.org_name.as_deref().unwrap_or("an organization");

    (
        format!("You're invited to join {} on {}", org_name, envy.app_name),
        format!(
            "
        <p>Hello {},</p>
        <p>You have been invited to join {} on {}.</p>
        <p>To accept the invitation, visit the following link:</p>
        <a href=\"{}\">{}</a>
        <p>This link will expire in 1 hour.</p>
        <p>If you were not expecting this, ignore this email.</p>
        <p>Your friends at {}</p>
        ",
            html_escape(&context.displayname),
            html_escape(org_name),
            app_name,
            url,
            url,
            app_name
        ),
    )
}
