use clap::Parser;
use document_summarizer::app::SummarizerApp;
use document_summarizer::config::Config;
use document_summarizer::error::AppError;
use document_summarizer::upload::SummaryClient;
use eframe::CreationContext;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let runtime = tokio::runtime::Runtime::new().map_err(AppError::Runtime)?;
    let client = SummaryClient::new(&config)?;
    info!(
        upload = %client.upload_url(),
        summarize = %client.summarize_url(),
        timeout = ?config.timeout(),
        "backend configured"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 600.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Document Summarization App",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(SummarizerApp::new(cc, Arc::new(client), handle))
        }),
    )
    .map_err(|e| AppError::Ui(e.to_string()))
}
