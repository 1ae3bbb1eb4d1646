// crates/locale-select-catalog/tests/sources/http_tests.rs
// ============================================================================
// Module: HttpSource Tests
// Description: Tests for the HTTP-backed catalog source.
// Purpose: Validate scheme policy, status handling, and size limits.
// Dependencies: locale-select-catalog, tiny_http
// ============================================================================

use locale_select_catalog::CatalogSource;
use locale_select_catalog::HttpSource;
use locale_select_catalog::HttpSourceOptions;
use locale_select_catalog::SourceError;

use crate::common::FLAT_DOCUMENT;
use crate::common::serve_once;

fn local_options() -> HttpSourceOptions {
    HttpSourceOptions {
        allow_http: true,
        ..HttpSourceOptions::default()
    }
}

// ============================================================================
// SECTION: Construction
// ============================================================================

#[test]
fn http_source_rejects_plain_http_by_default() {
    let err = HttpSource::new("http://127.0.0.1/config.json", HttpSourceOptions::default())
        .unwrap_err();
    assert!(matches!(err, SourceError::UnsupportedScheme(scheme) if scheme == "http"));
}

#[test]
fn http_source_rejects_non_http_schemes() {
    let err = HttpSource::new("ftp://example.test/config.json", local_options()).unwrap_err();
    assert!(matches!(err, SourceError::UnsupportedScheme(_)));
}

#[test]
fn http_source_rejects_unparseable_urls() {
    let err = HttpSource::new("not a url", HttpSourceOptions::default()).unwrap_err();
    assert!(matches!(err, SourceError::InvalidUri(_)));
}

#[test]
fn http_source_describes_itself_by_url() {
    let source =
        HttpSource::new("https://example.test/.milo/config.json", HttpSourceOptions::default())
            .unwrap();
    assert_eq!(source.describe(), "https://example.test/.milo/config.json");
}

// ============================================================================
// SECTION: Fetch
// ============================================================================

#[test]
fn http_source_fetches_document_bytes() {
    let (url, handle) = serve_once(200, FLAT_DOCUMENT);
    let source = HttpSource::new(&url, local_options()).unwrap();

    let payload = source.fetch().unwrap();
    assert_eq!(payload.bytes, FLAT_DOCUMENT.as_bytes());
    assert_eq!(payload.content_type.as_deref(), Some("application/json"));
    handle.join().expect("server thread");
}

#[test]
fn http_source_fails_closed_on_error_status_with_body_detail() {
    let (url, handle) = serve_once(503, "maintenance window until 14:00");
    let source = HttpSource::new(&url, local_options()).unwrap();

    let err = source.fetch().unwrap_err();
    let SourceError::Http(message) = err else {
        panic!("expected http failure, got {err:?}");
    };
    assert!(message.contains("503"));
    assert!(message.contains("maintenance window until 14:00"));
    handle.join().expect("server thread");
}

#[test]
fn http_source_error_detail_is_capped_at_max_bytes() {
    let (url, handle) = serve_once(500, "abcdefghijklmnopqrstuvwxyz");
    let options = HttpSourceOptions {
        max_bytes: 8,
        ..local_options()
    };
    let source = HttpSource::new(&url, options).unwrap();

    let err = source.fetch().unwrap_err();
    let SourceError::Http(message) = err else {
        panic!("expected http failure, got {err:?}");
    };
    assert!(message.ends_with(": abcdefgh"));
    handle.join().expect("server thread");
}

#[test]
fn http_source_treats_redirect_status_as_failure() {
    let (url, handle) = serve_once(302, "");
    let source = HttpSource::new(&url, local_options()).unwrap();

    let err = source.fetch().unwrap_err();
    assert!(matches!(err, SourceError::Http(message) if message.contains("302")));
    handle.join().expect("server thread");
}

#[test]
fn http_source_rejects_oversized_bodies() {
    let (url, handle) = serve_once(200, FLAT_DOCUMENT);
    let options = HttpSourceOptions {
        max_bytes: 16,
        ..local_options()
    };
    let source = HttpSource::new(&url, options).unwrap();

    let err = source.fetch().unwrap_err();
    assert!(matches!(err, SourceError::TooLarge { max_bytes: 16, .. }));
    handle.join().expect("server thread");
}

#[test]
fn http_source_reports_unreachable_hosts() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("http server");
    let url = format!("http://{}/.milo/config.json", server.server_addr());
    drop(server);

    let source = HttpSource::new(&url, local_options()).unwrap();
    assert!(matches!(source.fetch(), Err(SourceError::Http(_))));
}
