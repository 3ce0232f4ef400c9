//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; session transitions, strategy
//!   selection, and network mismatches are the events that matter
//! - Log level comes from config, overridable via RUST_LOG
//! - No metrics surface; this layer's state is typed and surfaced to the
//!   caller rather than counted

pub mod logging;

pub use logging::init_logging;
