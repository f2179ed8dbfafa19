//! Schema download payload
//!
//! The download is the editor text as typed, never a re-serialization of the
//! parsed schema.

pub const DOWNLOAD_FILE_NAME: &str = "form-schema.json";
pub const DOWNLOAD_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaDownload {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl SchemaDownload {
    pub fn from_editor_text(text: &str) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME,
            content_type: DOWNLOAD_CONTENT_TYPE,
            body: text.to_string(),
        }
    }
}
