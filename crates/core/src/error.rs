use thiserror::Error;

/// Unified error type surfaced by a scraping source.
///
/// Missing markup never errors: parsers degrade to placeholder or empty
/// values. Only transport failures and unusable payloads reach the host.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid selector: {0}")]
    Selector(String),
}
