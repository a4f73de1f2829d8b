#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Samples resource usage of the current process around an ETL run.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: System,
    pid: Pid,
    start_time: Instant,
    peak_memory: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        system.refresh_all();

        Self {
            system,
            pid,
            start_time: Instant::now(),
            peak_memory: 0,
            enabled,
        }
    }

    pub fn sample(&mut self) -> Option<SystemStats> {
        if !self.enabled {
            return None;
        }

        self.system.refresh_all();
        let process = self.system.process(self.pid)?;

        let memory_usage_mb = process.memory() / 1024 / 1024;
        if memory_usage_mb > self.peak_memory {
            self.peak_memory = memory_usage_mb;
        }

        Some(SystemStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb,
            peak_memory_mb: self.peak_memory,
            elapsed_time: self.start_time.elapsed(),
        })
    }
}
