use serde::{Deserialize, Serialize};

/// A value read out of an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField {
    /// What the value is, e.g. "Vendor" or "Energy (kWh)".
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
    /// 0–1.
    pub confidence: f64,
}

/// Server answer to `POST /upload/invoice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub status: String,
    pub filename: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub message: Option<String>,
    /// `None` until extraction is available server-side.
    #[serde(default)]
    pub extracted_data: Option<Vec<ExtractedField>>,
}
