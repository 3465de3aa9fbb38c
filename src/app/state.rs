use crate::upload::{SelectedFile, SequenceEvent, SequenceStage, UploadTicket};
use tracing::debug;

pub const SELECT_FILE_FIRST: &str = "Please select a file to upload.";
pub const UPLOAD_SUCCEEDED: &str = "File is uploaded successfully.";
pub const UPLOAD_FAILED: &str = "Failed to upload file.";
pub const REQUEST_FAILED: &str = "An error occurred while uploading or summarizing the file.";

/// Where the most recent sequence is. Only used for logging and tests; the
/// window never shows an in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    Summarizing,
    Done,
    Failed,
}

#[derive(Debug, Default)]
pub struct WidgetState {
    selected_file: Option<SelectedFile>,
    summary: String,
    status_message: String,
    error_message: String,
    generation: u64,
    phase: Phase,
}

impl WidgetState {
    /// Replace the selection. `None` (cancelled picker) leaves no file selected.
    /// Results still in flight for the old selection are discarded.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        debug!(file = ?file.as_ref().map(|f| &f.name), "file selected");
        self.selected_file = file;
        self.error_message.clear();
        self.summary.clear();
        self.status_message.clear();
        self.generation += 1;
        self.phase = Phase::Idle;
    }

    /// Validate and start a new sequence. Returns `None` when no file is selected.
    pub fn begin_upload(&mut self) -> Option<UploadTicket> {
        self.error_message.clear();

        let Some(file) = self.selected_file.clone() else {
            self.error_message = SELECT_FILE_FIRST.to_string();
            return None;
        };

        self.generation += 1;
        self.phase = Phase::Uploading;
        Some(UploadTicket {
            generation: self.generation,
            file,
        })
    }

    /// Fold one sequence event into the state. Returns `false` when the event
    /// belongs to a superseded sequence and was ignored.
    pub fn apply(&mut self, event: SequenceEvent) -> bool {
        if event.generation != self.generation {
            debug!(
                event_generation = event.generation,
                current = self.generation,
                "discarding stale sequence event"
            );
            return false;
        }

        match event.stage {
            SequenceStage::Uploaded { .. } => {
                self.status_message = UPLOAD_SUCCEEDED.to_string();
                self.summary.clear();
                self.phase = Phase::Summarizing;
            }
            SequenceStage::Summarized { summary } => {
                self.summary = summary;
                self.error_message.clear();
                self.phase = Phase::Done;
            }
            SequenceStage::Failed => {
                self.status_message = UPLOAD_FAILED.to_string();
                self.error_message = REQUEST_FAILED.to_string();
                self.phase = Phase::Failed;
            }
        }
        true
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
