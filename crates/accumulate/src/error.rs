//! Error types surfaced through the handler results.

use thiserror::Error;

/// Errors produced by the accumulation handlers.
///
/// Well-formed inputs define no failure modes: every accepted chunk shape
/// normalizes successfully and a request without a body finalizes to a
/// defined success outcome. What remains are precondition violations by the
/// hosting pipeline, where an event arrives for a request that was already
/// finalized. These fail fast instead of silently corrupting the body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccumulateError {
    #[error("chunk received after the request body was finalized")]
    ChunkAfterEnd,

    #[error("end of stream handled twice for the same request")]
    EndAfterEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AccumulateError::ChunkAfterEnd.to_string(),
            "chunk received after the request body was finalized"
        );
        assert_eq!(
            AccumulateError::EndAfterEnd.to_string(),
            "end of stream handled twice for the same request"
        );
    }
}
