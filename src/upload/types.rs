use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Acknowledgment the upload endpoint sends for an accepted file.
pub const UPLOAD_ACKNOWLEDGED: &str = "File uploaded successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: Option<u64>,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .to_string();
        let size = std::fs::metadata(&path).ok().map(|meta| meta.len());

        Self { name, path, size }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One accepted upload action: the file it sends and the generation its
/// results are tagged with.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub generation: u64,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceStage {
    Uploaded { file_name: String },
    Summarized { summary: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEvent {
    pub generation: u64,
    pub stage: SequenceStage,
}

impl SequenceEvent {
    pub fn new(generation: u64, stage: SequenceStage) -> Self {
        Self { generation, stage }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SummarizeRequest<'a> {
    #[serde(rename = "fileName")]
    pub file_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeResponse {
    pub summary: String,
}
