use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_IMAGE: &str = "https://via.placeholder.com/400x400?text=No+Image";

/// Configuration options specific to the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Image assigned to products created without one.
    pub default_image: String,
    /// Insert the demo catalog on start-up when the table is empty.
    pub seed_demo_products: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "app.db".to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            seed_demo_products: false,
        }
    }
}

impl ServerConfig {
    /// Load settings from built-in defaults, `config/default.yaml` (optional)
    /// and the process environment, in increasing order of precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("default_image", defaults.default_image)?
            .set_default("seed_demo_products", defaults.seed_demo_products)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
