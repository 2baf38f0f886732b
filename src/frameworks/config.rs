use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

// Runtime/server settings. Precedence: defaults < TOML file < environment.

pub const CONFIG_PATH_ENV: &str = "DUNGEON_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "dungeon.toml";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub scenarios_path: PathBuf,
    pub static_index_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            scenarios_path: PathBuf::from(DEFAULT_SCENARIOS_PATH),
            static_index_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, reason: String },
    Parse { path: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, reason } => write!(f, "failed to read {path}: {reason}"),
            ConfigError::Parse { path, reason } => write!(f, "invalid config {path}: {reason}"),
        }
    }
}

impl ServerConfig {
    // Load from the TOML file named by DUNGEON_CONFIG (or ./dungeon.toml when
    // present), then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };

        Ok(config.with_env_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        toml::from_str(&raw).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = parsed(&lookup, "DUNGEON_HOST") {
            self.host = host;
        }
        if let Some(port) = parsed(&lookup, "DUNGEON_PORT") {
            self.port = port;
        }
        if let Some(path) = non_blank(&lookup, "DUNGEON_SCENARIOS_PATH") {
            self.scenarios_path = PathBuf::from(path);
        }
        if let Some(path) = non_blank(&lookup, "DUNGEON_STATIC_INDEX") {
            self.static_index_path = Some(PathBuf::from(path));
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// Unparsable values are ignored so a typo falls back to the file/default.
fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
