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

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sqltrace::prelude::*;

fn main() {
    let cfg = LoggerConfig::new()
        .set_level(LogLevel::Warn)
        .set_slow_threshold(Duration::from_millis(100))
        .set_ignore_record_not_found(true)
        .set_colorful(true);
    let sink = Arc::new(ConsoleSink::new().set_colorful(cfg.colorful()));
    let logger = TraceLogger::with_sink(sink, cfg);

    logger.info(format_args!("connected to mysql://localhost:3306/shop"));

    // slow query
    let begin = Instant::now();
    thread::sleep(Duration::from_millis(150));
    logger.trace(begin, || QueryInfo::new("SELECT * FROM t_system_user", 42), None);

    // suppressed miss
    logger.trace(
        Instant::now(),
        || QueryInfo::new("SELECT * FROM t_system_user WHERE id = -1", 0),
        Some(&SqlError::RecordNotFound),
    );

    // failed statement
    let err = SqlError::Execute("Duplicate entry '1' for key 'PRIMARY'".into());
    logger.trace(
        Instant::now(),
        || QueryInfo::new("INSERT INTO t_system_user (id) VALUES (1)", 0),
        Some(&err),
    );

    // every operation shows up on the verbose clone
    let verbose = logger.log_mode(LogLevel::Info);
    verbose.trace(Instant::now(), || QueryInfo::new("SELECT 1", 1), None);
}
