//! Append-only NDJSON log of analysis requests.
//!
//! Every completed request leaves exactly one record here. The file is a
//! first-class store: the server reads it back for `GET /api/logs` and
//! truncates it for `DELETE /api/logs`, and the `cli-logs` binary tails it.

mod models;
mod store;

pub use models::{LogRecord, LoggedRequest, FALLBACK_RAW_MARKER};
pub use store::{FileRequestLog, RequestLogStore};
