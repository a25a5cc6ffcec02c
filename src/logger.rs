/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::LoggerConfig;
use crate::errors::SqlError;
use crate::level::LogLevel;
use crate::sink::{Field, Sink, TracingSink};

/// Rendered summary of one completed operation, produced on demand by the
/// caller's query-info provider.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    /// Final SQL text with parameters interpolated
    pub sql: String,
    /// Rows returned or affected
    pub rows: i64,
}

impl QueryInfo {
    pub fn new(sql: impl Into<String>, rows: i64) -> Self {
        QueryInfo { sql: sql.into(), rows }
    }
}

/// The logging contract a database access layer drives.
///
/// One `trace` call per completed operation, plain message relays for
/// everything else, and `log_mode` to derive a logger at a different
/// verbosity without touching the original.
pub trait SqlLogger {
    /// Informational message relay. Forwarded at debug severity.
    fn info(&self, msg: fmt::Arguments<'_>);

    /// Warning message relay.
    fn warn(&self, msg: fmt::Arguments<'_>);

    /// Error message relay.
    fn error(&self, msg: fmt::Arguments<'_>);

    /// Classify one completed operation and emit at most one record.
    ///
    /// `query_info` is deferred because rendering the final SQL text is
    /// comparatively expensive; it is invoked at most once, and only on
    /// the branch that actually emits.
    fn trace<F>(&self, begin: Instant, query_info: F, err: Option<&SqlError>)
    where
        F: FnOnce() -> QueryInfo;

    /// Clone this logger with the verbosity level replaced.
    fn log_mode(&self, level: LogLevel) -> Self
    where
        Self: Sized;
}

/// Trace classifier and emitter.
///
/// Decides, per completed operation, whether to emit and at what severity:
/// errors first, then slow queries, then the verbose trace at `Info`.
/// The branches are mutually exclusive and checked in that exact order, so
/// a slow query that also failed logs once, at error severity. Configuration
/// is immutable after construction, which is what makes a shared instance
/// safe for concurrent callers without locks.
pub struct TraceLogger<S: Sink = TracingSink> {
    sink: Arc<S>,
    config: LoggerConfig,
}

impl TraceLogger<TracingSink> {
    /// A logger emitting through the `tracing` macros.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(Arc::new(TracingSink), config)
    }
}

impl<S: Sink> TraceLogger<S> {
    pub fn with_sink(sink: Arc<S>, config: LoggerConfig) -> Self {
        TraceLogger { sink, config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn emit_fields(elapsed_ms: f64, info: QueryInfo) -> [Field; 3] {
        [
            Field::f64("time", elapsed_ms),
            Field::i64("rows", info.rows),
            Field::str("sql", info.sql),
        ]
    }
}

impl<S: Sink> Clone for TraceLogger<S> {
    fn clone(&self) -> Self {
        TraceLogger {
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
        }
    }
}

impl<S: Sink> SqlLogger for TraceLogger<S> {
    fn info(&self, msg: fmt::Arguments<'_>) {
        self.sink.debug(&msg.to_string(), &[]);
    }

    fn warn(&self, msg: fmt::Arguments<'_>) {
        self.sink.warn(&msg.to_string(), &[]);
    }

    fn error(&self, msg: fmt::Arguments<'_>) {
        self.sink.error(&msg.to_string(), &[]);
    }

    fn trace<F>(&self, begin: Instant, query_info: F, err: Option<&SqlError>)
    where
        F: FnOnce() -> QueryInfo,
    {
        let level = self.config.level();
        if level == LogLevel::Silent {
            return;
        }
        let elapsed = begin.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1e3;

        if let Some(err) = err {
            if level >= LogLevel::Error
                && (!err.is_record_not_found() || !self.config.ignore_record_not_found())
            {
                let fields = Self::emit_fields(elapsed_ms, query_info());
                self.sink.error(&err.to_string(), &fields);
                return;
            }
        }

        let threshold = self.config.slow_threshold();
        if !threshold.is_zero() && elapsed > threshold && level >= LogLevel::Warn {
            let fields = Self::emit_fields(elapsed_ms, query_info());
            self.sink.warn(&format!("SLOW SQL >= {:?}", threshold), &fields);
            return;
        }

        if level == LogLevel::Info {
            let fields = Self::emit_fields(elapsed_ms, query_info());
            self.sink.debug("", &fields);
        }
    }

    fn log_mode(&self, level: LogLevel) -> Self {
        TraceLogger {
            sink: Arc::clone(&self.sink),
            config: self.config.clone().set_level(level),
        }
    }
}
