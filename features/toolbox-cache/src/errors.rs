/// Errors while reading or writing cached values
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    /// The value could not be serialized
    #[error("Encoding error for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    /// The stored bytes do not decode into the requested type
    #[error("Decoding error for key '{key}': {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}
