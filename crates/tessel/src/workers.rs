//! Worker-concurrency sizing from host descriptors.

use sysinfo::System;

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Size the test engine's worker pool from the host's CPU and memory
/// budgets: one CPU stays reserved for the runner, memory allows one worker
/// per 2 GiB, and there is always at least one worker.
pub fn max_workers() -> usize {
    let mut sys = System::new_all();
    sys.refresh_all();

    let cpus = sys.cpus().len();
    let mem_gib = (sys.total_memory() / BYTES_PER_GIB) as usize;

    cpus.saturating_sub(1).min(mem_gib / 2).max(1)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_max_workers_is_at_least_one() {
        assert!(super::max_workers() >= 1);
    }
}
