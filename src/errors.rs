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

//!
//! Common Errors.
//!
use std::fmt;

/// Errors reported by the database access layer alongside a trace event.
///
/// None of these originate in this crate; the logger only classifies them.
/// `RecordNotFound` is the one distinguished condition, representing
/// "no rows matched", and can be kept out of error-level emission via
/// [`LoggerConfig::set_ignore_record_not_found`](crate::LoggerConfig::set_ignore_record_not_found).
#[derive(Debug)]
pub enum SqlError {
    RecordNotFound,
    Execute(String),
    Connection(String),
    Unknown,
}

impl SqlError {
    /// Whether this is the "no rows matched" sentinel.
    pub fn is_record_not_found(&self) -> bool {
        matches!(self, SqlError::RecordNotFound)
    }
}

impl fmt::Display for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SqlError::RecordNotFound => write!(f, "record not found"),
            SqlError::Execute(ref err) => err.fmt(f),
            SqlError::Connection(ref err) => err.fmt(f),
            SqlError::Unknown => write!(f, "Unknown Error"),
        }
    }
}

impl std::error::Error for SqlError {}
