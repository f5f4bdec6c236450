//! Audit trail of raw upstream responses.

mod response_log;

pub use response_log::{LogWriteError, ResponseLog};
