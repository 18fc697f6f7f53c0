#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use shortifier::error::ClipboardError;
use shortifier::infrastructure::http::SHORTEN_PATH;
use shortifier::presentation::format::{HistoryRow, ResultPanel};
use shortifier::presentation::{Clipboard, View};

/// Canned backend reply.
#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: Value,
}

#[derive(Clone)]
struct BackendState {
    reply: Reply,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Shortening backend bound to a random local port.
pub struct MockBackend {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    /// Answers every `POST /api/shorten` with `status` and `body`.
    pub async fn start(status: u16, body: Value) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            reply: Reply {
                status: StatusCode::from_u16(status).unwrap(),
                body,
            },
            received: received.clone(),
        };

        let app = Router::new()
            .route(SHORTEN_PATH, post(shorten))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    /// Replies 201 with a result echoing the submitted URL and expiry.
    pub async fn echo() -> Self {
        Self::start(201, Value::Null).await
    }

    /// JSON bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn shorten(
    State(state): State<BackendState>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(request.clone());

    let body = if state.reply.body.is_null() {
        shorten_result(
            "abc123",
            request["url"].as_str().unwrap_or_default(),
            request.get("expiresAt").cloned(),
        )
    } else {
        state.reply.body.clone()
    };

    (state.reply.status, Json(body))
}

pub fn shorten_result(code: &str, original_url: &str, expires_at: Option<Value>) -> Value {
    json!({
        "shortCode": code,
        "shortUrl": format!("http://localhost:8080/{code}"),
        "originalUrl": original_url,
        "createdAt": "2024-01-01T00:00:00",
        "expiresAt": expires_at.unwrap_or(Value::Null),
    })
}

/// Base URL nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Loading(bool),
    Result(Option<ResultPanel>),
    Error(Option<String>),
    Validation(Option<String>),
    History(Vec<HistoryRow>),
    Reset,
    Toast(String),
    Select(String),
    Confirm(String),
}

/// View that records every call.
#[derive(Default)]
pub struct RecordingView {
    pub events: Vec<Event>,
    pub answer: bool,
}

impl RecordingView {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    /// Rows of the most recent history render.
    pub fn last_history(&self) -> Option<&[HistoryRow]> {
        self.events.iter().rev().find_map(|e| match e {
            Event::History(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    pub fn last_result(&self) -> Option<&ResultPanel> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Result(Some(panel)) => Some(panel),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl View for RecordingView {
    fn show_loading(&mut self) {
        self.events.push(Event::Loading(true));
    }

    fn hide_loading(&mut self) {
        self.events.push(Event::Loading(false));
    }

    fn show_result(&mut self, panel: &ResultPanel) {
        self.events.push(Event::Result(Some(panel.clone())));
    }

    fn hide_result(&mut self) {
        self.events.push(Event::Result(None));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(Some(message.to_string())));
    }

    fn hide_error(&mut self) {
        self.events.push(Event::Error(None));
    }

    fn show_validation_error(&mut self, message: &str) {
        self.events.push(Event::Validation(Some(message.to_string())));
    }

    fn clear_validation_error(&mut self) {
        self.events.push(Event::Validation(None));
    }

    fn render_history(&mut self, rows: &[HistoryRow]) {
        self.events.push(Event::History(rows.to_vec()));
    }

    fn reset_form(&mut self) {
        self.events.push(Event::Reset);
    }

    fn toast(&mut self, message: &str) {
        self.events.push(Event::Toast(message.to_string()));
    }

    fn select_text(&mut self, text: &str) {
        self.events.push(Event::Select(text.to_string()));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.events.push(Event::Confirm(prompt.to_string()));
        self.answer
    }
}

/// Clipboard that keeps what was copied.
#[derive(Default, Clone)]
pub struct FakeClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
}

impl FakeClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Clipboard for FakeClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
