use std::sync::Arc;

use cors_gate_rs::{Cors, CorsSettings};

pub mod middleware;

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

const SETTINGS: &str = r#"{
    "enabled": true,
    "configurations": {
        "api": {
            "allowed-origins": ["http://api.example.com", "http://.*\\.example\\.com"],
            "allowed-methods": ["GET", "POST"],
            "allowed-headers": ["Content-Type", "X-Requested-With", "X-Example-Trace"],
            "exposed-headers": ["X-Example-Trace"],
            "allow-credentials": true,
            "max-age": 600
        },
        "local": {
            "allowed-origins": ["http://localhost:[0-9]+"],
            "allow-credentials": false,
            "max-age": -1
        }
    }
}"#;

pub fn build_state() -> Result<AppState, Box<dyn std::error::Error>> {
    let settings: CorsSettings = serde_json::from_str(SETTINGS)?;
    let cors = Arc::new(Cors::new(settings.into_options()?)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}
