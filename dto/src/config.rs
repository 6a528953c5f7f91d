use serde::{Deserialize, Serialize};

pub const DEFAULT_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Default, Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ServerConfig {
    /// Listen address for `serve`
    pub addr: String,
    /// Listen port for `serve`
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<bool, String> {
        if self.addr.trim().is_empty() {
            return Err("addr cannot be empty".into());
        }
        if self.port == 0 {
            return Err("port cannot be 0".into());
        }
        Ok(true)
    }
}
