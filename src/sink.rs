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

use tracing::{debug, error, warn};

const TARGET: &str = "sqltrace";

/// A typed structured field attached to an emitted record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    F64(f64),
    I64(i64),
    Str(String),
}

impl Field {
    pub fn f64(key: &'static str, value: f64) -> Self {
        Field { key, value: FieldValue::F64(value) }
    }

    pub fn i64(key: &'static str, value: i64) -> Self {
        Field { key, value: FieldValue::I64(value) }
    }

    pub fn str(key: &'static str, value: impl Into<String>) -> Self {
        Field { key, value: FieldValue::Str(value.into()) }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::F64(v) => write!(f, "{}", v),
            FieldValue::I64(v) => write!(f, "{}", v),
            FieldValue::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Renders fields as `key=value` pairs, space separated.
pub(crate) struct FieldList<'a>(pub &'a [Field]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", field.key, field.value)?;
        }
        Ok(())
    }
}

/// The structured-logging backend a [`TraceLogger`](crate::TraceLogger) writes to.
///
/// Writes are best-effort and infallible from the caller's point of view:
/// a sink must never propagate its own failures back into the operation
/// being logged. Implementations must be safe for concurrent use.
pub trait Sink: Send + Sync {
    fn debug(&self, message: &str, fields: &[Field]);
    fn warn(&self, message: &str, fields: &[Field]);
    fn error(&self, message: &str, fields: &[Field]);
}

/// Default sink, forwards to the `tracing` macros under the `sqltrace` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn debug(&self, message: &str, fields: &[Field]) {
        debug!(target: TARGET, fields = %FieldList(fields), "{}", message);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        warn!(target: TARGET, fields = %FieldList(fields), "{}", message);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        error!(target: TARGET, fields = %FieldList(fields), "{}", message);
    }
}

/// Plain stdout sink with a local timestamp prefix, for tools and tests
/// that run without a `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink {
    colorful: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    fn write(&self, tag: &str, ansi: &str, message: &str, fields: &[Field]) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if self.colorful {
            println!(
                "{} {}{:>5}\x1b[0m [sqltrace] {} {}",
                timestamp,
                ansi,
                tag,
                message,
                FieldList(fields)
            );
        } else {
            println!("{} {:>5} [sqltrace] {} {}", timestamp, tag, message, FieldList(fields));
        }
    }
}

impl Sink for ConsoleSink {
    fn debug(&self, message: &str, fields: &[Field]) {
        self.write("DEBUG", "\x1b[36m", message, fields);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        self.write("WARN", "\x1b[33m", message, fields);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        self.write("ERROR", "\x1b[31m", message, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_list_renders_pairs() {
        let fields = [
            Field::f64("time", 1.5),
            Field::i64("rows", 3),
            Field::str("sql", "SELECT 1"),
        ];
        assert_eq!(FieldList(&fields).to_string(), "time=1.5 rows=3 sql=SELECT 1");
        assert_eq!(FieldList(&[]).to_string(), "");
    }
}
