//! The request body accumulation plugin.
//!
//! [`AccumulateRequest`] buffers every fragment the pipeline delivers for a
//! request and releases the full concatenated body exactly once, at end of
//! stream. It is a pure accumulation layer: the body content is never
//! interpreted, validated, or transformed.

use bytes::Bytes;
use tracing::trace;

use crate::chunk::Chunk;
use crate::context::{RequestContext, ResponseContext};
use crate::error::AccumulateError;
use crate::handler::StreamHandler;

/// Configuration for [`AccumulateRequest`].
///
/// The accumulator recognizes no options; the record exists so the hosting
/// pipeline can construct every plugin through the same shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config;

/// The accumulation plugin instance.
///
/// Bound to no shared state: everything lives in the [`RequestContext`] the
/// pipeline supplies on each call, so one instance can serve any number of
/// concurrent requests as long as the events of a single request stay
/// sequential.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccumulateRequest;

/// Constructs the plugin from its configuration.
///
/// Diagnostics flow through the ambient [`tracing`] facade, so no logger or
/// stats handle is taken here.
pub fn init(_config: Config) -> AccumulateRequest {
    AccumulateRequest
}

impl StreamHandler for AccumulateRequest {
    fn on_data(
        &self,
        req: &mut RequestContext,
        _resp: &mut ResponseContext,
        chunk: Chunk,
    ) -> Result<(), AccumulateError> {
        let bytes = chunk.into_bytes();
        trace!(len = bytes.len(), "buffering request body fragment");
        req.accumulation_mut().append(bytes)
    }

    fn on_end(
        &self,
        req: &mut RequestContext,
        _resp: &mut ResponseContext,
        trailing: Option<Chunk>,
    ) -> Result<Option<Bytes>, AccumulateError> {
        if let Some(chunk) = trailing {
            let bytes = chunk.into_bytes();
            trace!(len = bytes.len(), "buffering trailing fragment");
            req.accumulation_mut().append(bytes)?;
        }

        let body = req.accumulation_mut().finalize()?;
        match &body {
            Some(bytes) => trace!(len = bytes.len(), "request body finalized"),
            None => trace!("request finished without a body"),
        }
        Ok(body)
    }
}
