//! Typed configuration sections read from [`CiteiConfig`].

use citei_core::prelude::*;

pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProperties for ServerSettings {
    fn prefix() -> &'static str {
        "server"
    }

    fn from_config(config: &CiteiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            host: config.get_or("server.host", "0.0.0.0".to_string())?,
            port: config.get_or("server.port", 3333)?,
        })
    }
}

pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// An in-memory database lives only as long as its connection.
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl ConfigProperties for DatabaseSettings {
    fn prefix() -> &'static str {
        "database"
    }

    fn from_config(config: &CiteiConfig) -> Result<Self, ConfigError> {
        let max_connections: u32 = config.get_or("database.pool.max", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.pool.max".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(Self {
            url: config.get_or("database.url", "sqlite://citei.db".to_string())?,
            max_connections,
        })
    }
}

/// Status code each resource answers with when its input fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    pub citacao: StatusCode,
    pub colecao: StatusCode,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            citacao: StatusCode::BAD_REQUEST,
            colecao: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl ConfigProperties for ValidationSettings {
    fn prefix() -> &'static str {
        "validation"
    }

    fn from_config(config: &CiteiConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            citacao: client_error_status(config, "validation.status.citacao", defaults.citacao)?,
            colecao: client_error_status(config, "validation.status.colecao", defaults.colecao)?,
        })
    }
}

fn client_error_status(
    config: &CiteiConfig,
    key: &str,
    default: StatusCode,
) -> Result<StatusCode, ConfigError> {
    let code: u16 = config.get_or(key, default.as_u16())?;
    match StatusCode::from_u16(code) {
        Ok(status) if status.is_client_error() => Ok(status),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            message: format!("{code} is not a 4xx status code"),
        }),
    }
}
