use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins.
///   When unset, any origin is allowed (the front-end page is served by
///   this same process, so the default is permissive).
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) => {
            let origins: Vec<&str> = allowed_origins.split(',').collect();
            cors.allow_origins(origins)
        }
        Err(_) => cors,
    }
}
