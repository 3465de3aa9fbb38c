pub mod state;
mod ui;

use crate::upload::{run_sequence, EventSink, SelectedFile, SequenceEvent, SummaryBackend};
use eframe::{egui, App};
pub use state::{Phase, WidgetState};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

/// Window root: the page heading and a single upload widget.
pub struct SummarizerApp {
    widget: UploadWidget,
}

impl SummarizerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        backend: Arc<dyn SummaryBackend>,
        runtime: Handle,
    ) -> Self {
        info!("Initializing document summarization window");
        Self {
            widget: UploadWidget::new(backend, runtime),
        }
    }
}

impl App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.poll_events();
        self.render(ctx);
    }
}

/// Owns the selection and message state, and starts upload sequences on the
/// async runtime. Sequences report back over a channel drained every frame.
pub struct UploadWidget {
    state: WidgetState,
    backend: Arc<dyn SummaryBackend>,
    runtime: Handle,
    event_sender: std_mpsc::Sender<SequenceEvent>,
    event_receiver: std_mpsc::Receiver<SequenceEvent>,
}

impl UploadWidget {
    pub fn new(backend: Arc<dyn SummaryBackend>, runtime: Handle) -> Self {
        let (event_sender, event_receiver) = std_mpsc::channel();
        Self {
            state: WidgetState::default(),
            backend,
            runtime,
            event_sender,
            event_receiver,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.state.select_file(file);
    }

    /// Handle a click on the upload button. `repaint` is woken whenever the
    /// sequence produces a result.
    pub fn start_upload(&mut self, repaint: Option<egui::Context>) {
        let Some(ticket) = self.state.begin_upload() else {
            info!("Upload requested with no file selected");
            return;
        };

        let backend = Arc::clone(&self.backend);
        let sink = EventSink::new(self.event_sender.clone(), repaint);
        self.runtime.spawn(async move {
            run_sequence(backend.as_ref(), ticket, &sink).await;
        });
    }

    /// Apply every event that has arrived since the last frame. Returns
    /// whether any of them changed the state.
    pub fn poll_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_receiver.try_recv() {
            changed |= self.state.apply(event);
        }
        changed
    }
}
