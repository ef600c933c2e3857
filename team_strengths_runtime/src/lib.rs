#![forbid(unsafe_code)]

//! Team strengths runtime.
//!
//! Wraps the engine with catalog configuration, roster sources, request
//! handlers, report digests and drift detection.
//!
//! No analysis logic lives here. Every computation and invariant is
//! delegated to the engine.

pub mod error;
pub mod config;
pub mod roster_source;
pub mod report;
pub mod service;
pub mod drift;
