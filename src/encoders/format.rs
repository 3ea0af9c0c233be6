use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output formats the service can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Csv,
    Xlsx,
}

#[derive(Debug, Error)]
#[error("unsupported document type '{0}', expected 'csv' or 'xlsx'")]
pub struct UnsupportedFormat(pub String);

impl DocumentFormat {
    /// File extension, also the wire name
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Csv => "csv",
            DocumentFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(DocumentFormat::Csv),
            "xlsx" => Ok(DocumentFormat::Xlsx),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
