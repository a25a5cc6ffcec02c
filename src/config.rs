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

use std::time::Duration;

use crate::level::LogLevel;

/// Logger configuration.
///
/// Fixed at construction; the only way to change a live logger is
/// [`SqlLogger::log_mode`](crate::SqlLogger::log_mode), which clones the
/// logger with a replaced level and leaves the original untouched.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    slow_threshold: Duration,
    level: LogLevel,
    ignore_record_not_found: bool,
    colorful: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            // zero disables slow-query detection
            slow_threshold: Duration::ZERO,
            level: LogLevel::default(),
            ignore_record_not_found: false,
            colorful: false,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slow_threshold(mut self, slow_threshold: Duration) -> Self {
        self.slow_threshold = slow_threshold;
        self
    }

    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    pub fn set_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_ignore_record_not_found(mut self, ignore: bool) -> Self {
        self.ignore_record_not_found = ignore;
        self
    }

    pub fn ignore_record_not_found(&self) -> bool {
        self.ignore_record_not_found
    }

    /// Cosmetic only, read by sinks that render for a terminal.
    pub fn set_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    pub fn colorful(&self) -> bool {
        self.colorful
    }
}
