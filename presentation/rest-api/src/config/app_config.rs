use super::{cors_config, google_config::GoogleConfig, server_config::ServerConfig};
use poem::middleware::Cors;

/// Aggregated application configuration, loaded once at startup.
///
/// Bundles the HTTP listener settings, CORS policy, and the Google API keys
/// so the rest of the bootstrap receives configuration instead of reading
/// the environment itself.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub google: GoogleConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            google: GoogleConfig::from_env(),
        }
    }
}
