//! Logging infrastructure: the [`Log`] reporter trait and its backends.

mod buffered;
mod logger;
mod subscriber;
mod types;

pub use buffered::{BufferedLog, LogEntry};
pub use logger::Logger;
pub use subscriber::{LOG_ENV, init_subscriber};
pub use types::{Level, LinkEvent, Log};
