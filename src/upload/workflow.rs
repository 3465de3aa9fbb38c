//! The upload → summarize sequence started by one click.

use crate::upload::client::{ClientError, SummaryBackend};
use crate::upload::types::{SequenceEvent, SequenceStage, UploadTicket};
use eframe::egui;
use std::sync::mpsc::Sender;
use tracing::{debug, error, info};

/// Where a running sequence reports to. Wakes the UI after every event so
/// results show up without user input.
#[derive(Clone)]
pub struct EventSink {
    sender: Sender<SequenceEvent>,
    repaint: Option<egui::Context>,
}

impl EventSink {
    pub fn new(sender: Sender<SequenceEvent>, repaint: Option<egui::Context>) -> Self {
        Self { sender, repaint }
    }

    pub fn emit(&self, event: SequenceEvent) {
        if self.sender.send(event).is_err() {
            debug!("widget is gone, dropping sequence event");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

pub async fn run_sequence<B>(backend: &B, ticket: UploadTicket, sink: &EventSink)
where
    B: SummaryBackend + ?Sized,
{
    let generation = ticket.generation;
    info!(
        generation,
        file = %ticket.file.name,
        size = ?ticket.file.size,
        "uploading file"
    );

    if let Err(e) = upload_then_summarize(backend, &ticket, sink).await {
        error!(generation, error = %e, "error uploading or summarizing the file");
        sink.emit(SequenceEvent::new(generation, SequenceStage::Failed));
    }
}

async fn upload_then_summarize<B>(
    backend: &B,
    ticket: &UploadTicket,
    sink: &EventSink,
) -> Result<(), ClientError>
where
    B: SummaryBackend + ?Sized,
{
    let generation = ticket.generation;

    let receipt = backend.upload(&ticket.file).await?;
    info!(generation, file_name = %receipt.file_name, "upload acknowledged");
    sink.emit(SequenceEvent::new(
        generation,
        SequenceStage::Uploaded {
            file_name: receipt.file_name.clone(),
        },
    ));

    let summary = backend.summarize(&receipt.file_name).await?;
    info!(generation, chars = summary.chars().count(), "summary received");
    sink.emit(SequenceEvent::new(
        generation,
        SequenceStage::Summarized { summary },
    ));

    Ok(())
}
