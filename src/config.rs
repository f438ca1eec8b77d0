use std::{env, fmt};

use config::{Config as ConfigBuilder, ConfigError, Environment as EnvSource, File};
use serde::{Deserialize, Deserializer};
use starfall_contact::{MailSettings, is_email_shape};
use strum::{AsRefStr, Display};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Anything other than `production` (any case) is treated as development.
    pub fn from_name(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        Ok(Self::from_name(&value))
    }
}

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default)]
    pub credential: Option<String>,
    /// Defaults to the sender identity.
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            sender: default_sender(),
            credential: None,
            recipient: None,
            accept_invalid_certs: false,
        }
    }
}

impl EmailConfig {
    pub fn has_credential(&self) -> bool {
        self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(&self.sender)
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("sender", &self.sender)
            .field("credential", &self.has_credential().then_some("<redacted>"))
            .field("recipient", &self.recipient)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_sender() -> String {
    "info@starfallwebdesign.ca".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (STARFALL__EMAIL__CREDENTIAL, etc.)
    /// 2. Legacy variables (PORT, EMAIL_USER, EMAIL_PASS, ENVIRONMENT, NODE_ENV)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("environment", "development")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(sender) = env::var("EMAIL_USER") {
            builder = builder.set_override("email.sender", sender)?;
        }
        if let Ok(credential) = env::var("EMAIL_PASS") {
            builder = builder.set_override("email.credential", credential)?;
        }
        if let Ok(environment) = env::var("ENVIRONMENT").or_else(|_| env::var("NODE_ENV")) {
            builder = builder.set_override("environment", environment)?;
        }

        builder = builder.add_source(
            EnvSource::with_prefix("STARFALL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing credential is fatal in production only; in development the
    /// contact endpoint answers with a configuration error instead.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !is_email_shape(&self.email.sender) {
            return Err(format!(
                "Email sender '{}' is not a valid address",
                self.email.sender
            ));
        }
        if !is_email_shape(self.email.recipient()) {
            return Err(format!(
                "Email recipient '{}' is not a valid address",
                self.email.recipient()
            ));
        }
        if self.environment.is_production() && !self.email.has_credential() {
            return Err(
                "Email credential is required in production (set EMAIL_PASS or STARFALL__EMAIL__CREDENTIAL)"
                    .to_string(),
            );
        }
        Ok(())
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            smtp_host: self.email.smtp_host.to_owned(),
            sender: self.email.sender.to_owned(),
            recipient: self.email.recipient().to_owned(),
            credential: self
                .email
                .credential
                .to_owned()
                .filter(|credential| !credential.is_empty()),
            accept_invalid_certs: self.email.accept_invalid_certs,
        }
    }
}
