//! Generated report artifact.

use sha2::{Digest, Sha256};

/// Encoded report returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummaryReport {
    file_name: String,
    content_type: String,
    payload: Vec<u8>,
}

impl ProjectSummaryReport {
    /// Creates a report artifact.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            payload,
        }
    }

    /// Returns the suggested download file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type of the payload.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the report and returns the encoded bytes.
    #[must_use]
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Returns the lowercase hex SHA-256 digest of the payload.
    #[must_use]
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(&self.payload))
    }
}
