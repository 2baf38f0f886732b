use crate::domain::errors::RequestError;

// Name reported for every uploaded file; the client never sends one.
pub const UPLOADED_FILE_NAME: &str = "uploaded_file.txt";

// Echo of uploaded file text.
#[derive(Debug, PartialEq, Eq)]
pub struct FileEcho {
    pub content: String,
    pub file_name: &'static str,
    // Length in characters.
    pub file_size: usize,
}

pub fn read_file(file_content: Option<String>) -> Result<FileEcho, RequestError> {
    let Some(content) = file_content else {
        return Err(RequestError::MissingField("fileContent"));
    };
    let file_size = content.chars().count();

    Ok(FileEcho {
        content,
        file_name: UPLOADED_FILE_NAME,
        file_size,
    })
}
