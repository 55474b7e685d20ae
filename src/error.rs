//! Errors at the pose-input boundary

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("expected {expected} landmarks, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("failed to read pose data from {origin}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pose JSON in {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
