pub mod email_template_name;
