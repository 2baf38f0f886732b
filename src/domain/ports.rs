use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::errors::CatalogError;

// Port for the scenario list served by `GET /api/scenarios`.
//
// The payload is passed through untouched; its shape is owned by whoever
// authors the backing asset.
#[async_trait]
pub trait ScenarioCatalog: Send + Sync {
    async fn list(&self) -> Result<Value, CatalogError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    // RFC 3339 in UTC with milliseconds, e.g. `2024-01-15T10:00:00.000Z`.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
