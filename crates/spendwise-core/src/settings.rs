use crate::auth::SignInConfig;
use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const WEB_CLIENT_ID_PLACEHOLDER: &str = "[PASTE-WEB-CLIENT-ID]";
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    WebClientId,
    ApiUrl,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub api_url: String,
    pub web_client_id: String,
    pub offline_access: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            api_url: DEFAULT_API_URL.to_string(),
            web_client_id: WEB_CLIENT_ID_PLACEHOLDER.to_string(),
            offline_access: true,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Creates a default config on first run
        let figment = Figment::new().merge(Toml::file(Self::config_path()));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save().unwrap_or_default();
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml_string)
    }

    fn config_path() -> PathBuf {
        ProjectDirs::from("io", "spendwise", "spendwise")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// The sign-in screen refuses to start an attempt until this passes.
    pub fn is_valid(&self) -> Result<(), ValidationError> {
        if self.web_client_id == WEB_CLIENT_ID_PLACEHOLDER || self.web_client_id.is_empty() {
            return Err(ValidationError::WebClientId);
        }
        if self.api_url.is_empty() {
            return Err(ValidationError::ApiUrl);
        }
        Ok(())
    }

    pub fn sign_in_config(&self) -> SignInConfig {
        SignInConfig {
            web_client_id: self.web_client_id.clone(),
            offline_access: self.offline_access,
        }
    }
}
