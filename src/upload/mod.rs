pub mod client;
mod types;
pub mod workflow;

pub use client::{ClientError, SummaryBackend, SummaryClient};
pub use types::{
    SelectedFile, SequenceEvent, SequenceStage, UploadReceipt, UploadTicket, UPLOAD_ACKNOWLEDGED,
};
pub use workflow::{run_sequence, EventSink};
