// crates/locale-select-catalog/src/source/http.rs
// ============================================================================
// Module: Locale Select HTTP Source
// Description: HTTP-backed source for the published locale configuration.
// Purpose: Fetch catalog bytes via HTTP GET.
// Dependencies: reqwest, url
// ============================================================================

//! ## Overview
//! [`HttpSource`] fetches the catalog document from a fixed `https://` URL.
//! Non-success status codes fail closed; the step then reports the catalog as
//! unavailable.
//! Invariants:
//! - Plain `http://` is refused unless explicitly allowed.
//! - Redirects are not followed; a 3xx status fails like any non-success status.
//! - Non-success failures carry the status and the (capped) response body.
//! - Payload bytes are capped at the configured limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use url::Url;

use crate::source::CatalogSource;
use crate::source::DEFAULT_MAX_SOURCE_BYTES;
use crate::source::SourceError;
use crate::source::SourcePayload;
use crate::source::enforce_max_bytes;
use crate::source::read_limit;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Default request timeout for catalog fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client settings for [`HttpSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSourceOptions {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Maximum accepted body size in bytes.
    pub max_bytes: usize,
    /// Whether plain `http://` URLs are accepted.
    pub allow_http: bool,
}

impl Default for HttpSourceOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_bytes: DEFAULT_MAX_SOURCE_BYTES,
            allow_http: false,
        }
    }
}

// ============================================================================
// SECTION: HTTP Source
// ============================================================================

/// HTTP-backed catalog source.
///
/// # Invariants
/// - `url` has an `https` scheme, or `http` when allowed at construction.
/// - Responses exceeding `max_bytes` are rejected.
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// HTTP client used for fetch requests.
    client: Client,
    /// Catalog document location.
    url: Url,
    /// Maximum accepted body size in bytes.
    max_bytes: usize,
}

impl HttpSource {
    /// Builds an HTTP source for `url` with a client configured from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the URL is invalid, uses a disallowed
    /// scheme, or the HTTP client cannot be constructed.
    pub fn new(url: &str, options: HttpSourceOptions) -> Result<Self, SourceError> {
        let url = parse_catalog_url(url, options.allow_http)?;
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(options.timeout)
            .build()
            .map_err(|err| SourceError::Http(err.to_string()))?;
        Ok(Self {
            client,
            url,
            max_bytes: options.max_bytes,
        })
    }

    /// Creates an HTTP source with a preconfigured client.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the URL is invalid or disallowed.
    pub fn with_client(
        client: Client,
        url: &str,
        options: HttpSourceOptions,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client,
            url: parse_catalog_url(url, options.allow_http)?,
            max_bytes: options.max_bytes,
        })
    }

    /// Returns the catalog document URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    fn fetch(&self) -> Result<SourcePayload, SourceError> {
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .map_err(|err| SourceError::Http(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let detail = read_error_body(response, self.max_bytes);
            return Err(SourceError::Http(if detail.is_empty() {
                format!("http status {status}")
            } else {
                format!("http status {status}: {detail}")
            }));
        }
        if let Some(length) = response.content_length()
            && length > u64::try_from(self.max_bytes).unwrap_or(u64::MAX)
        {
            let actual_bytes = usize::try_from(length).unwrap_or(usize::MAX);
            return Err(SourceError::TooLarge {
                max_bytes: self.max_bytes,
                actual_bytes,
            });
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let mut limited = response.take(read_limit(self.max_bytes));
        let mut bytes = Vec::new();
        limited.read_to_end(&mut bytes).map_err(|err| SourceError::Http(err.to_string()))?;
        enforce_max_bytes(bytes.len(), self.max_bytes)?;
        Ok(SourcePayload {
            bytes,
            content_type,
        })
    }
}

/// Reads a failed response's body as failure detail, capped at `max_bytes`.
///
/// Unreadable bodies yield an empty detail; invalid UTF-8 is replaced lossily.
fn read_error_body(response: Response, max_bytes: usize) -> String {
    let mut bytes = Vec::new();
    let cap = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if response.take(cap).read_to_end(&mut bytes).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&bytes).trim().to_string()
}

/// Parses a catalog URL and enforces the scheme policy.
fn parse_catalog_url(raw: &str, allow_http: bool) -> Result<Url, SourceError> {
    let url = Url::parse(raw).map_err(|err| SourceError::InvalidUri(err.to_string()))?;
    let allowed = match url.scheme() {
        "https" => true,
        "http" => allow_http,
        _ => false,
    };
    if !allowed {
        return Err(SourceError::UnsupportedScheme(url.scheme().to_string()));
    }
    Ok(url)
}
