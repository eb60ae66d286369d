// File: crates/candlesnap-core/src/error.rs
// Summary: Error taxonomies for payload normalization and chart rendering.

use thiserror::Error;

/// Terminal failures while turning a raw exchange payload into a `BarSeries`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Payload was an empty array, or not an array at all.
    #[error("payload contains no records")]
    EmptyPayload,

    /// A record was missing a field, carried an unparseable number, or
    /// violated the OHLC invariant.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The exchange identity is not one we know how to decode.
    #[error("unknown exchange '{0}'")]
    UnknownExchange(String),
}

/// Terminal failures while rendering a series to an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// An empty series is refused outright rather than drawn degenerate.
    #[error("cannot render an empty series")]
    EmptySeries,

    /// Surface allocation or PNG serialization failed.
    #[error("image encoding failed: {0}")]
    Encoding(String),
}
