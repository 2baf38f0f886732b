use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::domain::errors::CatalogError;
use crate::domain::ports::ScenarioCatalog;
use crate::domain::scenario::{Scenario, ScenarioSource};

// Scenario catalog backed by a JSON file. The file is re-read on every call
// so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct FileScenarioCatalog {
    pub path: PathBuf,
}

// Entry counts reported when the server starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub predefined: usize,
}

impl FileScenarioCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Decode the asset as scenario records and count the predefined ones.
    // Requests never go through this; `list` serves the file as stored.
    pub async fn summary(&self) -> Result<CatalogSummary, CatalogError> {
        let value = self.list().await?;
        let scenarios: Vec<Scenario> = match serde_json::from_value(value) {
            Ok(scenarios) => scenarios,
            Err(err) => {
                return Err(CatalogError::Parse {
                    path: self.path.display().to_string(),
                    reason: err.to_string(),
                });
            }
        };

        let predefined = scenarios
            .iter()
            .filter(|scenario| scenario.source == ScenarioSource::Predefined)
            .count();

        Ok(CatalogSummary {
            total: scenarios.len(),
            predefined,
        })
    }
}

#[async_trait]
impl ScenarioCatalog for FileScenarioCatalog {
    async fn list(&self) -> Result<Value, CatalogError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|err| CatalogError::Read {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            })?;

        serde_json::from_slice(&raw).map_err(|err| CatalogError::Parse {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::path::Path;

    fn scenario_json(id: &str, source: &str) -> Value {
        json!({
            "id": id,
            "title": "Title",
            "description": "Description",
            "theme": "fantasy",
            "difficulty": "easy",
            "complexity": "simple",
            "estimatedPlayTime": 30,
            "source": source,
            "created_at": "2024-01-15T10:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn when_file_holds_json_array_then_it_is_returned_verbatim() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(file, r#"[{{"id":"7","title":"Anything","extra":true}}]"#)
            .expect("expected write");
        let catalog = FileScenarioCatalog::new(file.path());

        let value = catalog.list().await.expect("expected catalog to load");

        assert_eq!(
            value,
            json!([{"id": "7", "title": "Anything", "extra": true}])
        );
    }

    #[tokio::test]
    async fn when_file_changes_then_next_list_sees_new_content() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(file, "[]").expect("expected write");
        let catalog = FileScenarioCatalog::new(file.path());
        let first = catalog.list().await.expect("expected list");
        assert_eq!(first, json!([]));

        std::fs::write(file.path(), r#"[{"id":"1"}]"#)
            .expect("expected rewrite");

        let second = catalog.list().await.expect("expected list");
        assert_eq!(second, json!([{"id": "1"}]));
    }

    #[tokio::test]
    async fn when_file_is_missing_then_returns_read_error() {
        let dir = tempfile::tempdir().expect("expected temp dir");
        let catalog = FileScenarioCatalog::new(dir.path().join("missing.json"));

        let result = catalog.list().await;

        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[tokio::test]
    async fn when_file_is_not_json_then_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(file, "not json").expect("expected write");
        let catalog = FileScenarioCatalog::new(file.path());

        let result = catalog.list().await;

        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[tokio::test]
    async fn when_bundled_asset_is_summarized_then_every_entry_is_predefined() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let catalog = FileScenarioCatalog::new(manifest_dir.join("data/scenarios.json"));

        let summary = catalog.summary().await.expect("expected bundled asset");

        assert!(summary.total > 0);
        assert_eq!(summary.predefined, summary.total);
    }

    #[tokio::test]
    async fn when_sources_are_mixed_then_summary_counts_only_predefined() {
        let file = tempfile::NamedTempFile::new().expect("expected temp file");
        let entries = json!([
            scenario_json("1", "predefined"),
            scenario_json("2", "ai_generated"),
            scenario_json("3", "predefined"),
        ]);
        std::fs::write(file.path(), entries.to_string())
            .expect("expected write");
        let catalog = FileScenarioCatalog::new(file.path());

        let summary = catalog.summary().await.expect("expected summary");

        assert_eq!(
            summary,
            CatalogSummary {
                total: 3,
                predefined: 2,
            }
        );
    }

    #[tokio::test]
    async fn when_entries_are_not_scenarios_then_summary_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file");
        write!(file, r#"[{{"id":1}}]"#).expect("expected write");
        let catalog = FileScenarioCatalog::new(file.path());

        let listed = catalog.list().await;
        let summary = catalog.summary().await;

        assert!(listed.is_ok());
        assert!(matches!(summary, Err(CatalogError::Parse { .. })));
    }
}
