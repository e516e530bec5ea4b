//! Wire DTOs for the brief generation backend.
//!
//! DESIGN
//! ======
//! Field names match the backend's snake_case JSON keys exactly; the request
//! is always sent with every field populated, defaults already applied.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body posted to the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefRequest {
    pub title: String,
    pub content_type: String,
    /// Comma-split keywords, trimmed, empties removed, in input order.
    pub keywords: Vec<String>,
    pub tone: String,
    pub audience: String,
    pub additional_notes: String,
}

/// Successful response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BriefResponse {
    pub brief: String,
}

/// Error response body. `detail` is optional and may be absent entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
