#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod mail;

pub use mail::enums::email_template_name::{
    is_valid_template_name, list_template_names, EmailTemplateName, UnknownTemplateName,
    TEMPLATE_NAMES,
};
