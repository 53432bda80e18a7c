//! Process-wide engine, installed once at startup and read-only afterwards.

use crate::cors::Cors;
use once_cell::sync::OnceCell;
use tracing::warn;

static GLOBAL_CORS: OnceCell<Cors> = OnceCell::new();

/// Publishes `cors` for the rest of the process.
///
/// Returns the installed engine, or gives `cors` back if one was already installed.
pub fn install(cors: Cors) -> Result<&'static Cors, Cors> {
    GLOBAL_CORS.try_insert(cors).map_err(|(_, rejected)| {
        warn!("CORS engine already installed; keeping the existing configuration");
        rejected
    })
}

pub fn installed() -> Option<&'static Cors> {
    GLOBAL_CORS.get()
}
