//! Brief generation backend client.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds: the transport returns an error since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `BriefError`, whose `Display` is the message
//! shown to the editor. Status and body interpretation lives in
//! `interpret_response` so it is independent of the transport.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{BriefRequest, BriefResponse, ErrorBody};

/// Errors produced by a generation round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BriefError {
    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    /// A success response whose body was not a brief.
    #[error("{0}")]
    Decode(String),
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => format!("HTTP error! status: {status}"),
    }
}

/// Something that turns a `BriefRequest` into generated brief text.
#[async_trait(?Send)]
pub trait BriefBackend {
    /// Perform exactly one generation attempt.
    ///
    /// # Errors
    ///
    /// Returns a `BriefError` for transport failures, non-2xx statuses, or an
    /// undecodable success body.
    async fn generate(&self, request: &BriefRequest) -> Result<String, BriefError>;
}

/// Map a status code and raw body to the generated brief or an error.
///
/// # Errors
///
/// Non-2xx statuses yield `Status`, taking `detail` from a JSON body when it
/// is present and non-empty. A 2xx body without a `brief` string yields
/// `Decode`.
pub fn interpret_response(status: u16, body: &str) -> Result<String, BriefError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<BriefResponse>(body)
            .map(|resp| resp.brief)
            .map_err(|e| BriefError::Decode(e.to_string()));
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty());
    Err(BriefError::Status { status, detail })
}

/// Interpret a response whose body may have failed to read.
///
/// # Errors
///
/// A read failure on a 2xx response is a `Transport` error. On any other
/// status the body counts as empty, so the status message is reported.
pub fn read_response(status: u16, body: Result<String, String>) -> Result<String, BriefError> {
    match body {
        Ok(body) => interpret_response(status, &body),
        Err(e) if (200..300).contains(&status) => Err(BriefError::Transport(e)),
        Err(_) => interpret_response(status, ""),
    }
}

pub const METHOD_POST: &str = "POST";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Everything the transport puts on the wire for one generation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: &'static str,
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

/// `POST`s the JSON request to a fixed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBriefBackend {
    url: String,
}

impl HttpBriefBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Describe the HTTP request for `request`. The URL is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the body cannot be serialized.
    pub fn outbound(&self, request: &BriefRequest) -> Result<OutboundRequest, BriefError> {
        let body = serde_json::to_string(request).map_err(|e| BriefError::Transport(e.to_string()))?;
        Ok(OutboundRequest { method: METHOD_POST, url: self.url.clone(), content_type: CONTENT_TYPE_JSON, body })
    }
}

#[async_trait(?Send)]
impl BriefBackend for HttpBriefBackend {
    async fn generate(&self, request: &BriefRequest) -> Result<String, BriefError> {
        let outbound = self.outbound(request)?;
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&outbound.url)
                .header("Content-Type", outbound.content_type)
                .body(outbound.body)
                .map_err(|e| BriefError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| BriefError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string());
            read_response(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("{} {} skipped outside the browser", outbound.method, outbound.url);
            Err(BriefError::Transport("not available outside the browser".to_owned()))
        }
    }
}
