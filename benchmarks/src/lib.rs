// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared settings for the criterion benches.

use std::time::Duration;

/// Element counts every container bench runs with.
pub const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Returns `true` when `FAST_BENCH=1` is set.
///
/// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench containers
pub fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Measurement time and sample size for the current mode.
pub fn measurement_settings() -> (Duration, usize) {
    if is_fast_mode() {
        (Duration::from_millis(500), 10)
    } else {
        (Duration::from_secs(3), 50)
    }
}
