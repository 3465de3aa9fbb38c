//! Exercises `SummaryClient` against a real HTTP server on a loopback port.
//!
//! The server mimics the summarization backend: it stores the uploaded part
//! under a token that differs from the original filename, so the tests can
//! check which name reaches `/summarize`.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use document_summarizer::config::Config;
use document_summarizer::upload::{
    run_sequence, ClientError, EventSink, SelectedFile, SequenceEvent, SequenceStage,
    SummaryBackend, SummaryClient, UploadTicket,
};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Clone, Copy)]
enum UploadMode {
    Accept,
    WrongMessage,
    NoMessage,
    ServerError,
}

#[derive(Default)]
struct Recorded {
    part_name: Option<String>,
    original_name: Option<String>,
    content: Vec<u8>,
    summarize_bodies: Vec<Value>,
}

#[derive(Clone)]
struct Backend {
    mode: UploadMode,
    summarize_status: StatusCode,
    recorded: Arc<Mutex<Recorded>>,
}

async fn upload(State(backend): State<Backend>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let part_name = field.name().map(str::to_string);
        let original_name = field.file_name().map(str::to_string);
        let content = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

        let mut recorded = backend.recorded.lock().unwrap();
        recorded.part_name = part_name;
        recorded.original_name = original_name;
        recorded.content = content;
    }

    match backend.mode {
        UploadMode::Accept => Json(json!({
            "message": "File uploaded successfully",
            "fileName": "stored-0001.txt",
        }))
        .into_response(),
        UploadMode::WrongMessage => Json(json!({ "message": "Something else" })).into_response(),
        UploadMode::NoMessage => Json(json!({ "fileName": "stored-0001.txt" })).into_response(),
        UploadMode::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Failed to upload file: disk full" })),
        )
            .into_response(),
    }
}

async fn summarize(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend
        .recorded
        .lock()
        .unwrap()
        .summarize_bodies
        .push(body.clone());

    if backend.summarize_status != StatusCode::OK {
        return (
            backend.summarize_status,
            Json(json!({ "message": "Failed to summarize document" })),
        )
            .into_response();
    }
    let file_name = body["fileName"].as_str().unwrap_or_default();
    Json(json!({ "summary": format!("Summary of {file_name}.") })).into_response()
}

async fn spawn_backend(mode: UploadMode, summarize_status: StatusCode) -> (Url, Backend) {
    let backend = Backend {
        mode,
        summarize_status,
        recorded: Arc::new(Mutex::new(Recorded::default())),
    };
    let app = Router::new()
        .route("/upload", post(upload))
        .route("/summarize", post(summarize))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Url::parse(&format!("http://{addr}")).unwrap(), backend)
}

fn document(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("meeting-notes")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(contents).unwrap();
    file
}

#[tokio::test]
async fn upload_sends_file_part_with_original_name() {
    let (base, backend) = spawn_backend(UploadMode::Accept, StatusCode::OK).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"Agenda: budget review.");
    let selected = SelectedFile::new(doc.path());

    let receipt = client.upload(&selected).await.unwrap();
    assert_eq!(receipt.file_name, "stored-0001.txt");

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(recorded.part_name.as_deref(), Some("file"));
    assert_eq!(recorded.original_name.as_deref(), Some(selected.name.as_str()));
    assert_eq!(recorded.content, b"Agenda: budget review.");
}

#[tokio::test]
async fn full_sequence_summarizes_server_token() {
    let (base, backend) = spawn_backend(UploadMode::Accept, StatusCode::OK).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"Agenda: budget review.");
    let (sender, receiver) = std::sync::mpsc::channel();

    let ticket = UploadTicket {
        generation: 1,
        file: SelectedFile::new(doc.path()),
    };
    run_sequence(&client, ticket, &EventSink::new(sender, None)).await;

    let events: Vec<SequenceEvent> = receiver.try_iter().collect();
    assert_eq!(
        events.last().map(|e| &e.stage),
        Some(&SequenceStage::Summarized {
            summary: "Summary of stored-0001.txt.".to_string()
        })
    );

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(
        recorded.summarize_bodies,
        vec![json!({ "fileName": "stored-0001.txt" })]
    );
}

#[tokio::test]
async fn unexpected_message_is_rejected_without_summarize() {
    let (base, backend) = spawn_backend(UploadMode::WrongMessage, StatusCode::OK).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"text");
    let (sender, receiver) = std::sync::mpsc::channel();

    let err = client
        .upload(&SelectedFile::new(doc.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected { ref message } if message == "Something else"));

    let ticket = UploadTicket {
        generation: 9,
        file: SelectedFile::new(doc.path()),
    };
    run_sequence(&client, ticket, &EventSink::new(sender, None)).await;

    let events: Vec<SequenceEvent> = receiver.try_iter().collect();
    assert_eq!(events, vec![SequenceEvent::new(9, SequenceStage::Failed)]);
    assert!(backend.recorded.lock().unwrap().summarize_bodies.is_empty());
}

#[tokio::test]
async fn missing_message_counts_as_rejection() {
    let (base, _backend) = spawn_backend(UploadMode::NoMessage, StatusCode::OK).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"text");

    let err = client
        .upload(&SelectedFile::new(doc.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected { .. }));
}

#[tokio::test]
async fn non_success_status_is_an_http_error() {
    let (base, _backend) = spawn_backend(UploadMode::ServerError, StatusCode::OK).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"text");

    let err = client
        .upload(&SelectedFile::new(doc.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn summarize_failure_ends_sequence_as_failed() {
    let (base, _backend) = spawn_backend(UploadMode::Accept, StatusCode::NOT_FOUND).await;
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"text");
    let (sender, receiver) = std::sync::mpsc::channel();

    let ticket = UploadTicket {
        generation: 3,
        file: SelectedFile::new(doc.path()),
    };
    run_sequence(&client, ticket, &EventSink::new(sender, None)).await;

    let stages: Vec<SequenceStage> = receiver.try_iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![
            SequenceStage::Uploaded {
                file_name: "stored-0001.txt".to_string()
            },
            SequenceStage::Failed,
        ]
    );
}

#[tokio::test]
async fn unreachable_backend_fails_the_sequence() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    let client = SummaryClient::new(&Config::new(base)).unwrap();
    let doc = document(b"text");
    let (sender, receiver) = std::sync::mpsc::channel();

    let ticket = UploadTicket {
        generation: 1,
        file: SelectedFile::new(doc.path()),
    };
    run_sequence(&client, ticket, &EventSink::new(sender, None)).await;

    let events: Vec<SequenceEvent> = receiver.try_iter().collect();
    assert_eq!(events, vec![SequenceEvent::new(1, SequenceStage::Failed)]);
}
