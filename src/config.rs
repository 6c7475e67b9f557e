use std::env;

use typed_builder::TypedBuilder;

use crate::domain::ConfigError;

pub const DEFAULT_PORT: u16 = 1245;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const PORT_VAR: &str = "PORT";

/// Where the students service listens.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ServerConfig {
    #[builder(default = DEFAULT_HOST.to_string(), setter(into))]
    host: String,
    #[builder(default = DEFAULT_PORT)]
    port: u16,
}

impl ServerConfig {
    /// Reads `PORT` from the environment, falling back to [`DEFAULT_PORT`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var(PORT_VAR).ok().as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => raw
                .parse::<u16>()
                .map(|port| Self::builder().port(port).build())
                .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
