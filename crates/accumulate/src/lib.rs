//! A request body accumulation plugin for streaming gateway pipelines
//!
//! This crate provides a small middleware component that sits in a gateway's
//! streaming pipeline, buffers the body fragments of one in-flight request as
//! they arrive, and hands the complete body to the caller as a single
//! contiguous byte sequence at end of stream. Downstream stages (signing,
//! transformation, logging) can then operate on the whole body instead of
//! fragments.
//!
//! # Features
//!
//! - Per-request accumulation driven entirely by caller-owned context objects
//! - Tagged chunk variant covering the payload shapes upstream producers emit
//!   (raw bytes, text, integers, booleans), with total normalization to bytes
//! - Explicit three-state lifecycle per request: empty, accumulating,
//!   finalized — with fail-fast errors for out-of-order events
//! - Trailing fragments delivered together with the end-of-stream signal are
//!   appended before finalization
//! - No shared mutable state: concurrent requests are isolated by construction
//! - Clean error handling, no panic crosses the handler boundary
//!
//! # Example
//!
//! ```
//! use micro_accumulate::chunk::Chunk;
//! use micro_accumulate::context::{RequestContext, ResponseContext};
//! use micro_accumulate::handler::StreamHandler;
//! use micro_accumulate::plugin::{init, Config};
//!
//! let plugin = init(Config::default());
//!
//! let mut req = RequestContext::new();
//! let mut resp = ResponseContext::default();
//!
//! plugin.on_data(&mut req, &mut resp, Chunk::from("hello ")).unwrap();
//! plugin.on_data(&mut req, &mut resp, Chunk::from("world")).unwrap();
//!
//! let body = plugin.on_end(&mut req, &mut resp, None).unwrap();
//! assert_eq!(body.as_deref(), Some(&b"hello world"[..]));
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`chunk`]: The tagged chunk variant and its normalization to bytes
//! - [`context`]: Request-scoped accumulation state and its lifecycle
//! - [`handler`]: The handler-invocation contract with the hosting pipeline
//! - [`plugin`]: The accumulation plugin itself
//! - [`error`]: Error types surfaced through the handler results
//!
//! # Invocation discipline
//!
//! The hosting pipeline delivers events for a given request strictly
//! sequentially: zero or more [`handler::StreamHandler::on_data`] calls
//! followed by exactly one [`handler::StreamHandler::on_end`] call, all
//! against the same [`context::RequestContext`]. Every call completes
//! synchronously before returning; nothing blocks, suspends, or performs
//! I/O. Cancelling a request is simply dropping its context, which releases
//! the buffer by ordinary ownership rules.
//!
//! Events arriving after finalization are precondition violations and fail
//! fast with [`error::AccumulateError`] instead of silently corrupting the
//! accumulated body.
//!
//! # Logging
//!
//! The data path emits `trace!` events through the [`tracing`] facade
//! (fragment lengths on intake, body length on finalization). Install any
//! `tracing-subscriber` in the host to collect them; the plugin never
//! requires a subscriber for correctness.

pub mod chunk;
pub mod context;
pub mod error;
pub mod handler;
pub mod plugin;
