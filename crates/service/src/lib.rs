//! Service layer for laureates
//!
//! Centralizes the import pipeline and the read/write operations used by the
//! HTTP handlers and the CLI.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod blocking;
mod error;
mod import_service;
mod query_service;

pub use error::ServiceError;
pub use import_service::{ImportReport, ImportService};
pub use query_service::QueryService;
