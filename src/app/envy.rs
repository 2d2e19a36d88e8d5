use std::{env, io::ErrorKind};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    pub frontend_url: String,

    pub mail_host: String,
    pub mail_user: String,
    pub mail_pass: String,
}

fn default_app_name() -> String {
    "Mist".to_string()
}

/// Loads `filename` into the process environment. A missing file is not an error.
pub fn load_env_file(filename: &str) -> Result<(), dotenvy::Error> {
    match dotenvy::from_filename(filename) {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

impl Envy {
    /// Loads `.env.{APP_ENV}`, then reads the process environment. An unreadable
    /// or malformed env file is logged and skipped.
    pub fn from_env() -> Result<Envy, envy::Error> {
        let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
        let filename = format!(".env.{}", app_env);

        if let Err(e) = load_env_file(&filename) {
            tracing::warn!(%e, %filename, "failed to load env file");
        }

        envy::from_env::<Envy>()
    }
}
