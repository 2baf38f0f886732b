use serde::{Deserialize, Serialize};

use crate::domain::scenario::GeneratedScenario;

// Request payload for echoing uploaded file text.
#[derive(Debug, Deserialize)]
pub struct ReadFileRequest {
    #[serde(rename = "fileContent")]
    pub file_content: Option<String>,
}

// Response payload for the file echo.
#[derive(Debug, Serialize)]
pub struct ReadFileResponse {
    pub content: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileSize")]
    pub file_size: usize,
}

// Request payload for scenario generation.
#[derive(Debug, Deserialize)]
pub struct GenerateScenarioRequest {
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    #[serde(rename = "fileContent")]
    pub file_content: Option<String>,
}

// Response payload wrapping a generated scenario.
#[derive(Debug, Serialize)]
pub struct GenerateScenarioResponse {
    pub success: bool,
    pub scenario: GeneratedScenario,
}

// Acknowledgement for the mock favorite/leave actions.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
