use handlebars::html_escape;

use crate::app::envy::Envy;

use super::{token_url, TemplateContext};

pub fn sign_up_v1_template(context: &TemplateContext, envy: &Envy) -> (String, String) {
    let url = html_escape(&token_url(envy, "auth/verify", &context.access_token));
    let app_name = html_escape(&envy.app_name);

    (
        format!("{} email verification", envy.app_name),
        format!(
            "
        <p>Hello {},</p>
        <p>Thanks for signing up for {}.</p>
        <p>To verify your email, visit the following link:</p>
        <a href=\"{}\">{}</a>
        <p>This link will expire in 1 hour.</p>
        <p>If you did not sign up, ignore this email.</p>
        <p>Your friends at {}</p>
        ",
            html_escape(&context.displayname),
            app_name,
            url,
            url,
            app_name
        ),
    )
}
