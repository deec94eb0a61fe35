use thiserror::Error;

/// Errors emitted while loading or validating floss catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON deserialization failed.
    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry carried an empty floss code.
    #[error("catalog entry {index} has an empty floss code")]
    EmptyCode { index: usize },
    /// Two entries share the same floss code.
    #[error("duplicate floss code {code}")]
    DuplicateCode { code: String },
    /// An entry's hex is not a six digit color.
    #[error("floss {code} has invalid hex {hex:?}")]
    InvalidHex { code: String, hex: String },
    /// Explicit channels disagree with the hex color.
    #[error("floss {code}: channels ({r}, {g}, {b}) do not match hex {hex}")]
    ChannelMismatch {
        code: String,
        hex: String,
        r: u8,
        g: u8,
        b: u8,
    },
}
