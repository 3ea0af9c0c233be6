//! API models for the docmaker endpoints.
//!
//! - `POST /` accepts a [`DocumentRequest`] and answers with a
//!   [`DownloadDescriptor`]
//! - `GET /?file=<name>` takes a [`DownloadQuery`] and streams the file back
//!
//! # Request example
//!
//! ```json
//! {
//!   "data": [
//!     {"name": "alpha", "count": 1, "active": true},
//!     {"name": "beta", "count": 2, "active": false}
//!   ],
//!   "typeofDoc": "xlsx"
//! }
//! ```
//!
//! # Response example
//!
//! ```json
//! {"downloadLink": "http://localhost:3000/download?file=file_1700000000_4f1c....xlsx"}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::observability::MetricsSnapshot;
use crate::records::Record;

/// Body of `POST /`
///
/// `typeofDoc` stays a plain string here so an unknown format is reported as a
/// validation error rather than a JSON syntax error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentRequest {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(rename = "typeofDoc", default)]
    pub typeof_doc: String,
}

/// Response of `POST /`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadDescriptor {
    #[serde(rename = "downloadLink")]
    pub download_link: String,
}

/// Query string of `GET /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadQuery {
    pub file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub version: String,
    pub metrics: MetricsSnapshot,
}
