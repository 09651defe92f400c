use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
pub mod models;
pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, in increasing priority: `config/default.*`, `config/{RUN_ENV}.*`,
/// then environment variables with the `RIDELINK` prefix and `__` separator
/// (e.g. `RIDELINK__TWILIO__ACCOUNT_SID`). A `.env` file is read into the
/// environment first so local secrets never have to live in config files.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());
    tracing::debug!("loading configuration for RUN_ENV={}", run_env);

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("RIDELINK").separator("__"));

    builder.build()?.try_deserialize()
}

/// Checks that every credential the brokers need at call time is present.
///
/// Called once at startup so a misconfigured process dies immediately instead
/// of failing on its first request. The Twilio sender number is deliberately
/// not checked here: only the booking-SMS route uses it, and a missing sender
/// is reported as a per-request 500 by that handler.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let twilio = config
        .twilio
        .as_ref()
        .ok_or_else(|| ConfigError::Message("missing [twilio] configuration".into()))?;
    for (name, value) in [
        ("twilio.account_sid", &twilio.account_sid),
        ("twilio.auth_token", &twilio.auth_token),
        ("twilio.verify_service_sid", &twilio.verify_service_sid),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("missing required config value: {name}")));
        }
    }

    let groutes = config
        .groutes
        .as_ref()
        .ok_or_else(|| ConfigError::Message("missing [groutes] configuration".into()))?;
    if groutes.api_key.trim().is_empty() {
        return Err(ConfigError::Message(
            "missing required config value: groutes.api_key".into(),
        ));
    }

    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the dotenv file is loaded into the environment exactly once.
///
/// The path can be overridden with `DOTENV_OVERRIDE`; otherwise `.env` in the
/// working directory is used. Missing files are ignored.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
