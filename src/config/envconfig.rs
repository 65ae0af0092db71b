use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Typed configuration read from `APP_`-prefixed environment variables.
///
/// Nested fields use `__`, so `general.port` is read from `APP_GENERAL__PORT`.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        // Crate root first, then the current directory
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_environment(environment::<Self>())
    }

    /// Same as [`EnvConfig::from_env`] but reads the given variables instead of
    /// the process environment. `.env` files are not consulted.
    fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<config_rs::Map<String, String>>();
        Self::from_environment(environment::<Self>().source(Some(vars)))
    }

    fn from_environment(source: config_rs::Environment) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

fn environment<C: EnvConfig>() -> config_rs::Environment {
    config_rs::Environment::with_prefix(C::PREFIX)
        .prefix_separator("_")
        .separator(C::SEPARATOR)
        .try_parsing(true)
}
