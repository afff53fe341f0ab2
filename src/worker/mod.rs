//! Background worker answering catalog queries.
//!
//! Fixture parsing and query evaluation run on a Zellij worker thread; the
//! plugin talks to it only through JSON-serialized messages, with trace
//! context propagated across the boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::JobBoardWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
