//! Request-scoped accumulation state.
//!
//! All mutable state of the plugin lives here, inside caller-owned context
//! objects whose lifetime spans one request. The plugin instance itself holds
//! nothing, so two concurrently active requests can never interfere as long
//! as each supplies its own context.

use bytes::{Bytes, BytesMut};

use crate::error::AccumulateError;

/// The caller-owned, per-request record carried between handler invocations.
///
/// Owns exactly one [`Accumulation`] value. The accumulation state is an
/// explicit typed field rather than something attached dynamically, so
/// "no data seen yet" and "an empty fragment seen" stay distinguishable
/// through the type instead of through field presence.
#[derive(Debug, Default)]
pub struct RequestContext {
    accumulation: Accumulation,
}

impl RequestContext {
    /// Creates a fresh context for a new request.
    ///
    /// The accumulation state starts empty: no buffer exists until the first
    /// fragment arrives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulation state of this request.
    pub fn accumulation(&self) -> &Accumulation {
        &self.accumulation
    }

    /// Returns the accumulation state of this request for mutation.
    pub fn accumulation_mut(&mut self) -> &mut Accumulation {
        &mut self.accumulation
    }
}

/// The per-response counterpart of [`RequestContext`].
///
/// The accumulator never touches it; it exists because the pipeline hands
/// every handler both sides of the exchange.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseContext;

/// Per-request body accumulation state machine.
///
/// Three states, no reversing transition:
///
/// - **Empty**: initial; no buffer exists (distinct from an empty buffer)
/// - **Accumulating**: entered on the first appended fragment; the buffer is
///   append-only and preserves arrival order
/// - **Finalized**: terminal; entered by [`finalize`](Self::finalize) and
///   rejecting every further mutation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Accumulation {
    state: State,
}

#[derive(Debug, Default, PartialEq, Eq)]
enum State {
    /// No fragment has been seen for this request
    #[default]
    Empty,
    /// Holds every fragment appended so far, in arrival order
    Accumulating(BytesMut),
    /// The body has been handed out; no further mutation is accepted
    Finalized,
}

impl Accumulation {
    /// Appends one normalized fragment, creating the buffer on first use.
    ///
    /// # Errors
    ///
    /// Fails with [`AccumulateError::ChunkAfterEnd`] if the request was
    /// already finalized.
    pub fn append(&mut self, bytes: Bytes) -> Result<(), AccumulateError> {
        match &mut self.state {
            State::Empty => {
                let mut buffer = BytesMut::with_capacity(bytes.len());
                buffer.extend_from_slice(&bytes);
                self.state = State::Accumulating(buffer);
                Ok(())
            }
            State::Accumulating(buffer) => {
                buffer.extend_from_slice(&bytes);
                Ok(())
            }
            State::Finalized => Err(AccumulateError::ChunkAfterEnd),
        }
    }

    /// Finalizes the accumulation and releases the complete body.
    ///
    /// Returns `None` when no fragment was ever appended ("no body"), or the
    /// full concatenated byte sequence in arrival order. This is the single
    /// point at which the accumulated body leaves the context; afterward the
    /// state is terminal.
    ///
    /// # Errors
    ///
    /// Fails with [`AccumulateError::EndAfterEnd`] if the request was
    /// already finalized.
    pub fn finalize(&mut self) -> Result<Option<Bytes>, AccumulateError> {
        match std::mem::replace(&mut self.state, State::Finalized) {
            State::Empty => Ok(None),
            State::Accumulating(buffer) => Ok(Some(buffer.freeze())),
            State::Finalized => Err(AccumulateError::EndAfterEnd),
        }
    }

    /// Returns whether no fragment has been seen yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Returns whether at least one fragment has been buffered.
    #[inline]
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// Returns whether the body has already been handed out.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized)
    }

    /// Returns the number of bytes buffered so far.
    ///
    /// Zero both before any fragment arrived and after finalization.
    pub fn accumulated_len(&self) -> usize {
        match &self.state {
            State::Accumulating(buffer) => buffer.len(),
            State::Empty | State::Finalized => 0,
        }
    }
}
