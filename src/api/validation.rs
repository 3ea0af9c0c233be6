use thiserror::Error;

use super::models::DocumentRequest;
use crate::encoders::{DocumentFormat, UnsupportedFormat};
use crate::records::Record;

#[derive(Debug, Error)]
pub enum RequestValidationError {
    #[error("invalid document type: {0}")]
    UnsupportedFormat(#[from] UnsupportedFormat),
}

/// A request whose format has been checked against the supported set
#[derive(Debug, Clone)]
pub struct DocumentJob {
    pub format: DocumentFormat,
    pub records: Vec<Record>,
}

pub fn validate_request(request: DocumentRequest) -> Result<DocumentJob, RequestValidationError> {
    let format = request.typeof_doc.parse::<DocumentFormat>()?;
    Ok(DocumentJob {
        format,
        records: request.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> DocumentRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validate_request_accepts_supported_formats() {
        let job = validate_request(request(json!({
            "data": [{"a": 1}],
            "typeofDoc": "xlsx"
        })))
        .unwrap();
        assert_eq!(job.format, DocumentFormat::Xlsx);
        assert_eq!(job.records.len(), 1);
    }

    #[test]
    fn validate_request_rejects_unknown_format() {
        let err = validate_request(request(json!({
            "data": [{"a": 1}],
            "typeofDoc": "pdf"
        })))
        .unwrap_err();
        assert!(matches!(err, RequestValidationError::UnsupportedFormat(_)));
    }

    #[test]
    fn validate_request_rejects_missing_format() {
        let err = validate_request(request(json!({"data": []}))).unwrap_err();
        assert!(matches!(err, RequestValidationError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let job = validate_request(request(json!({"typeofDoc": "csv"}))).unwrap();
        assert!(job.records.is_empty());
    }
}
