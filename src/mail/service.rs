use axum::http::StatusCode;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use validator::Validate;

use crate::app::{envy::Envy, models::api_error::ApiError};

use super::{
    dtos::send_template_mail_dto::SendTemplateMailDto,
    enums::email_template_name::EmailTemplateName,
    errors::MailApiError,
    templates::{render_template, TemplateContext},
};

pub fn build_mail(to: &str, subject: &str, body: &str, envy: &Envy) -> Result<Message, ApiError> {
    let Ok(to) = to.parse::<Mailbox>() else {
        return Err(MailApiError::InvalidAddress.value());
    };
    let Ok(from) = envy.mail_user.parse::<Mailbox>() else {
        tracing::error!(mail_user = %envy.mail_user, "mail user is not an address");
        return Err(MailApiError::SendFailed.value());
    };

    let mail = Message::builder()
        .to(to)
        .from(from)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_PLAIN)
                        .body(String::from("Failed to display email.")),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_HTML)
                        .body(String::from(body)),
                ),
        );

    match mail {
        Ok(mail) => Ok(mail),
        Err(e) => {
            tracing::error!(%e);
            Err(MailApiError::SendFailed.value())
        }
    }
}

pub async fn send_mail(to: &str, subject: &str, body: &str, envy: &Envy) -> Result<(), ApiError> {
    let mail = build_mail(to, subject, body, envy)?;

    let mailer = match AsyncSmtpTransport::<Tokio1Executor>::relay(&envy.mail_host) {
        Ok(builder) => builder
            .credentials(Credentials::new(
                envy.mail_user.to_string(),
                envy.mail_pass.to_string(),
            ))
            .build(),
        Err(e) => {
            tracing::error!(%e);
            return Err(MailApiError::SendFailed.value());
        }
    };

    match mailer.send(mail).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(MailApiError::SendFailed.value())
        }
    }
}

/// Resolves the template name and validates the request, then renders `(subject, body)`.
pub fn prepare_template_mail(
    dto: &SendTemplateMailDto,
    envy: &Envy,
) -> Result<(String, String), ApiError> {
    let name = match dto.template_name.parse::<EmailTemplateName>() {
        Ok(name) => name,
        Err(e) => {
            tracing::info!(%e, "rejected template mail");
            return Err(MailApiError::UnknownTemplate.value());
        }
    };

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let context = TemplateContext {
        displayname: dto.displayname.to_string(),
        access_token: dto.access_token.to_string(),
        org_name: dto.org_name.clone(),
    };

    Ok(render_template(name, &context, envy))
}

pub async fn send_template_mail(dto: &SendTemplateMailDto, envy: &Envy) -> Result<(), ApiError> {
    let (subject, body) = prepare_template_mail(dto, envy)?;

    send_mail(&dto.to, &subject, &body, envy).await
}
