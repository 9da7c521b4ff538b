use thiserror::Error;

/// Failure while reading or parsing a roster asset.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by a display surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Unknown slot: {slot}")]
    UnknownSlot { slot: String },
}
