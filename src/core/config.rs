//! Workload loader configuration.

use serde::{Deserialize, Serialize};

/// Holds raw workload config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawWorkloadConfig {
    pub task_cores: Option<u32>,
    pub scheduling_interval: Option<f64>,
    pub file_size: Option<u64>,
    pub output_size: Option<u64>,
}

/// Represents workload loader configuration.
///
/// These values are owned by the surrounding experiment setup and are copied
/// verbatim into every produced task descriptor.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WorkloadConfig {
    /// Number of processing elements used by each task.
    pub task_cores: u32,
    /// Interval in seconds between utilization samples in trace files.
    pub scheduling_interval: f64,
    /// Input file size in bytes assigned to each task.
    pub file_size: u64,
    /// Output size in bytes assigned to each task.
    pub output_size: u64,
}

impl WorkloadConfig {
    /// Creates workload config with default parameter values.
    pub fn new() -> Self {
        Self {
            task_cores: 1,
            scheduling_interval: 300.,
            file_size: 300,
            output_size: 300,
        }
    }

    /// Creates workload config by reading parameter values from YAML file
    /// (uses default values if some parameters are absent).
    pub fn from_file(file_name: &str) -> Self {
        let raw: RawWorkloadConfig = serde_yaml::from_str(
            &std::fs::read_to_string(file_name).unwrap_or_else(|_| panic!("Can't read file {}", file_name)),
        )
        .unwrap_or_else(|_| panic!("Can't parse YAML from file {}", file_name));
        let default = WorkloadConfig::new();

        Self {
            task_cores: raw.task_cores.unwrap_or(default.task_cores),
            scheduling_interval: raw.scheduling_interval.unwrap_or(default.scheduling_interval),
            file_size: raw.file_size.unwrap_or(default.file_size),
            output_size: raw.output_size.unwrap_or(default.output_size),
        }
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new()
    }
}
