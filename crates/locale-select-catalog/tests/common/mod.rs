// crates/locale-select-catalog/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared documents and a one-shot HTTP server for catalog tests.
// Purpose: Provide reusable fixtures for source and loader tests.
// Dependencies: tiny_http
// ============================================================================

//! ## Overview
//! Provides canned catalog documents in both wire shapes and a helper that
//! serves exactly one HTTP response from a background thread.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::thread;
use std::thread::JoinHandle;

use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Documents
// ============================================================================

/// Flat-form document with two languages and one region.
pub const FLAT_DOCUMENT: &str = r#"{
    "languages": [
        { "code": "fr", "language": "French", "livecopies": "fr-FR, fr-CA" },
        { "code": "de", "language": "German", "livecopies": "de-DE" }
    ],
    "regions": [
        { "key": "EMEA", "value": "fr-FR,de-DE" }
    ]
}"#;

/// Sheet-form document as published by the shared configuration.
pub const SHEET_DOCUMENT: &str = r#"{
    "locales": {
        "total": 3,
        "offset": 0,
        "limit": 3,
        "data": [
            { "languagecode": "fr", "language": "French", "livecopies": "fr-FR,fr-CA" },
            { "languagecode": "de", "language": "German", "livecopies": "de-DE" },
            { "languagecode": "la", "language": "Latin", "livecopies": "" }
        ]
    },
    "localegroups": {
        "data": [
            { "key": "EMEA", "value": "fr-FR,de-DE" }
        ]
    },
    ":names": ["locales", "localegroups"],
    ":type": "multi-sheet"
}"#;

// ============================================================================
// SECTION: HTTP Server
// ============================================================================

/// Serves one response with the given status and body; returns the URL.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let url = format!("http://{}/.milo/config.json", server.server_addr());
    let body = body.as_bytes().to_vec();
    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = Response::from_data(body)
                .with_status_code(status)
                .with_header(Header::from_bytes("Content-Type", "application/json").unwrap());
            request.respond(response).expect("respond");
        }
    });
    (url, handle)
}
