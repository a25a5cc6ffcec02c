// Copyright (c) 2021 akita contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! This crate offers:
//!
//! *   A structured trace logger for database access layers;
//! *   Slow-query detection and per-operation severity classification.
//!
//! A [`TraceLogger`] sits between an ORM or query layer and a
//! structured-logging sink. The access layer calls [`SqlLogger::trace`]
//! once per completed operation with the start time, an optional error and
//! a deferred query-info provider; the logger decides whether to emit, at
//! which severity, and with which structured fields:
//!
//! *   failed operations log at error severity with the error's message;
//! *   operations slower than the configured threshold log at warn
//!     severity with a `SLOW SQL >= {threshold}` message;
//! *   at the `Info` level every remaining operation logs at debug
//!     severity.
//!
//! Each emitted record carries `time` (elapsed milliseconds), `rows`
//! (affected row count) and `sql` (rendered query text). The provider is
//! invoked at most once, and only when a record is actually emitted.
//!
//! ## Installation
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sqltrace = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use sqltrace::{LoggerConfig, LogLevel, QueryInfo, SqlError, SqlLogger, TraceLogger};
//!
//! let cfg = LoggerConfig::new()
//!     .set_level(LogLevel::Warn)
//!     .set_slow_threshold(Duration::from_millis(200))
//!     .set_ignore_record_not_found(true);
//! let logger = TraceLogger::new(cfg);
//!
//! // one call per completed operation
//! let begin = Instant::now();
//! let rendered = "SELECT * FROM t_system_user WHERE id = 1".to_string();
//! logger.trace(begin, || QueryInfo::new(rendered, 1), None);
//!
//! // errors win over slow-query detection
//! let err = SqlError::Execute("Duplicate entry '1' for key 'PRIMARY'".into());
//! logger.trace(begin, || QueryInfo::new("INSERT INTO t_system_user ..", 0), Some(&err));
//!
//! // derive a more verbose logger; the original is untouched
//! let verbose = logger.log_mode(LogLevel::Info);
//! assert_eq!(logger.config().level(), LogLevel::Warn);
//! assert_eq!(verbose.config().level(), LogLevel::Info);
//! ```
mod config;
mod errors;
mod level;
mod logger;
mod sink;
pub mod prelude;

#[doc(inline)]
pub use config::LoggerConfig;
#[doc(inline)]
pub use errors::SqlError;
#[doc(inline)]
pub use level::LogLevel;
#[doc(inline)]
pub use logger::{QueryInfo, SqlLogger, TraceLogger};
#[doc(inline)]
pub use sink::{ConsoleSink, Field, FieldValue, Sink, TracingSink};
