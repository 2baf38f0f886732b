use crate::interface_adapters::http::{ApiError, parse_json_body};
use crate::interface_adapters::protocol::{ReadFileRequest, ReadFileResponse};
use crate::use_cases::read_file;
use axum::Json;
use axum::body::Bytes;

// Echo uploaded text back with its size.
pub async fn read_file_handler(body: Bytes) -> Result<Json<ReadFileResponse>, ApiError> {
    let request: ReadFileRequest = parse_json_body(&body)?;
    let echo = read_file(request.file_content)?;

    Ok(Json(ReadFileResponse {
        content: echo.content,
        file_name: echo.file_name.to_string(),
        file_size: echo.file_size,
    }))
}
