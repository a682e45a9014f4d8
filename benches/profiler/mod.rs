// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok())
}

/// Criterion tuned by `BENCH_*` env vars, with a pprof flamegraph per benchmark.
pub fn criterion() -> Criterion {
    let frequency = env_number::<i32>("PROFILE_FREQ").unwrap_or(100).clamp(1, 1000);
    let sample_size = env_number::<usize>("BENCH_SAMPLE_SIZE").unwrap_or(40).clamp(10, 200);
    let warmup = env_number::<u64>("BENCH_WARMUP_SECS").unwrap_or(2).clamp(1, 60);
    let measurement = env_number::<u64>("BENCH_MEASUREMENT_SECS").unwrap_or(4).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
