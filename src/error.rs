use thiserror::Error;

/// Failures of the weather feed boundary. The numeric engine itself is
/// total and never produces these; they surface from the fetch/decode layer
/// to the caller instead of being swallowed into fallback text.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The provider could not be reached or answered with a non-success
    /// status / undecodable body.
    #[error("weather feed unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The provider answered but carried no forecast records.
    #[error("weather feed returned an empty forecast")]
    EmptyFeed,

    /// A single record was structurally unusable (bad timestamp, missing
    /// weather description).
    #[error("malformed forecast record ({context}): {reason}")]
    MalformedRecord { context: String, reason: String },
}

impl FeedError {
    /// Stable machine-readable discriminant for API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Unavailable(_) => "feed_unavailable",
            FeedError::EmptyFeed => "feed_empty",
            FeedError::MalformedRecord { .. } => "malformed_record",
        }
    }
}
