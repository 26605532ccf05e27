use std::path::PathBuf;

use serde::Deserialize;

const ENV_PREFIX: &str = "DEBUG_ENDPOINT";

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExtensionSettings {
    /// Prefix every extension route is mounted under. Treated as opaque.
    pub endpoint_prefix: String,
    /// Directory of front-end assets the host may serve for this extension.
    pub web_directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Tracing,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub sink: SinkKind,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: HttpSettings,
    pub extension: ExtensionSettings,
    pub log: LogSettings,
}

impl ServerConfig {
    /// Defaults, then `config.toml` if present, then `DEBUG_ENDPOINT__*` env vars.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    pub fn load_from<S>(file: S, env: config::Environment) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("server.bind_address", "0.0.0.0:3000")?
            .set_default("extension.endpoint_prefix", "/debug-endpoint")?
            .set_default("extension.web_directory", "./web")?
            .set_default("log.sink", "tracing")?
            .set_default("log.path", "debug.jsonl")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}
