//! The handler-invocation contract between the hosting pipeline and a plugin.
//!
//! The pipeline drives a plugin through two entry points per request: one
//! call per body fragment, then exactly one call at end of stream. Both
//! complete synchronously before returning, so completing exactly once is
//! simply returning the `Result`.

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::context::{RequestContext, ResponseContext};
use crate::error::AccumulateError;

/// A pipeline plugin observing the body stream of one request.
///
/// The expected invocation discipline is strictly sequential per request:
/// zero or more [`on_data`](Self::on_data) calls followed by exactly one
/// [`on_end`](Self::on_end) call, all against the same [`RequestContext`].
/// Implementations hold no per-request state of their own; everything lives
/// in the contexts the pipeline supplies.
pub trait StreamHandler {
    /// Handles one body fragment of the request.
    ///
    /// Success carries no payload; the accumulated data is only released by
    /// [`on_end`](Self::on_end).
    fn on_data(
        &self,
        req: &mut RequestContext,
        resp: &mut ResponseContext,
        chunk: Chunk,
    ) -> Result<(), AccumulateError>;

    /// Handles the end-of-stream signal for the request.
    ///
    /// Some transports deliver the last fragment together with the
    /// end-of-stream signal rather than as a separate data event; such a
    /// fragment is passed as `trailing`. Returns the complete request body
    /// in arrival order, or `None` when the request carried no body at all.
    fn on_end(
        &self,
        req: &mut RequestContext,
        resp: &mut ResponseContext,
        trailing: Option<Chunk>,
    ) -> Result<Option<Bytes>, AccumulateError>;
}
