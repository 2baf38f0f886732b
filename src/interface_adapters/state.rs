use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{Clock, ScenarioCatalog};

// Shared application state for the HTTP handlers. Nothing in here is mutated
// after startup.
#[derive(Clone)]
pub struct AppState {
    // Any catalog implementation (file-backed in production, stubs in tests).
    pub catalog: Arc<dyn ScenarioCatalog>,
    // Single-page-app entry served for unmatched non-API GETs, when set.
    pub static_index_path: Option<PathBuf>,
}

// Wall-clock time source.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
