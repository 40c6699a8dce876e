//! Dataset reader for PlanetLab workload traces.

use std::fs::{read_dir, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::core::config::WorkloadConfig;
use crate::core::load_model::{UtilizationTrace, ZeroLoadModel};
use crate::core::task::WorkloadTask;
use crate::extensions::dataset_reader::{DatasetReader, LoadError};

/// Scale factor converting the raw task size from the first trace line
/// into instructions.
const LENGTH_SCALE: u64 = 100_000;

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::NotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

/// Reads the task length from the first line of a PlanetLab trace file.
///
/// The line must hold a base-10 integer, which is scaled by 100,000 to obtain
/// the length in instructions.
pub fn read_task_length(path: &Path) -> Result<u64, LoadError> {
    let mut reader = open(path)?;
    let mut first_line = String::new();
    reader.read_line(&mut first_line).map_err(|e| LoadError::NotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value = first_line.trim();
    if value.is_empty() {
        return Err(LoadError::Format {
            path: path.to_path_buf(),
            reason: "first line is missing or empty".to_string(),
        });
    }
    let raw = value.parse::<u64>().map_err(|_| LoadError::Format {
        path: path.to_path_buf(),
        reason: format!("first line \"{}\" is not an integer", value),
    })?;
    raw.checked_mul(LENGTH_SCALE).ok_or_else(|| LoadError::Format {
        path: path.to_path_buf(),
        reason: format!("task size {} overflows when scaled to instructions", raw),
    })
}

/// Reads the task QoS score from the last non-empty line of a PlanetLab trace
/// file. Blank lines after the score are ignored.
///
/// Performs a full sequential scan of the file, so the cost is linear in the
/// trace size.
pub fn read_task_qos(path: &Path) -> Result<i64, LoadError> {
    let reader = open(path)?;
    let mut last_line = String::new();
    for line in reader.lines() {
        let line = line.map_err(|e| LoadError::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !line.trim().is_empty() {
            last_line = line;
        }
    }

    let value = last_line.trim();
    if value.is_empty() {
        return Err(LoadError::Format {
            path: path.to_path_buf(),
            reason: "no lines present".to_string(),
        });
    }
    value.parse::<i64>().map_err(|_| LoadError::Format {
        path: path.to_path_buf(),
        reason: format!("last line \"{}\" is not an integer", value),
    })
}

/// Builds the task list from a directory of per-host trace files.
///
/// One task is produced per file found directly inside `dir` (subdirectories
/// are skipped, no recursion). Task ids follow the file system enumeration
/// order, which is platform-dependent; the returned list is sorted by
/// descending QoS and only this order is meaningful to consumers.
///
/// The first unreadable or malformed file aborts the whole load. A missing
/// directory fails with [`LoadError::NotFound`], a directory without trace
/// files with [`LoadError::EmptyInput`].
pub fn load_workload(owner_id: u32, dir: &Path, config: &WorkloadConfig) -> Result<Vec<WorkloadTask>, LoadError> {
    let entries = read_dir(dir).map_err(|e| LoadError::NotFound {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut tasks = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::NotFound {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let id = tasks.len() as u32;
        tasks.push(WorkloadTask {
            id,
            length: read_task_length(&path)?,
            qos: read_task_qos(&path)?,
            cores: config.task_cores,
            file_size: config.file_size,
            output_size: config.output_size,
            utilization: UtilizationTrace::new(&path, config.scheduling_interval),
            cpu_load_model: Box::new(ZeroLoadModel::new()),
            ram_load_model: Box::new(ZeroLoadModel::new()),
            owner_id,
            vm_id: id,
        });
    }

    if tasks.is_empty() {
        return Err(LoadError::EmptyInput {
            path: dir.to_path_buf(),
        });
    }
    info!("Read {} trace files from {}", tasks.len(), dir.display());

    tasks.sort_by(|a, b| b.qos.cmp(&a.qos));
    Ok(tasks)
}

/// Dataset reader for PlanetLab workload traces.
///
/// A trace directory holds one plain-text file per monitored host. The first
/// line of each file is the task size, the last non-empty line is the QoS
/// score and the lines in between are the utilization time series consumed
/// lazily by the simulation engine.
///
/// Pass the trace directory to [`parse()`](PlanetLabDatasetReader::parse) method.
pub struct PlanetLabDatasetReader {
    config: WorkloadConfig,

    tasks: Vec<WorkloadTask>,
    current_task: usize,
}

impl PlanetLabDatasetReader {
    /// Creates dataset reader.
    pub fn new(config: WorkloadConfig) -> Self {
        Self {
            config,
            tasks: Vec::new(),
            current_task: 0,
        }
    }

    /// Loads all trace files from the directory on behalf of the given owner.
    pub fn parse(&mut self, owner_id: u32, dir: &Path) -> Result<(), LoadError> {
        self.tasks = load_workload(owner_id, dir, &self.config)?;
        self.current_task = 0;
        Ok(())
    }
}

impl DatasetReader for PlanetLabDatasetReader {
    fn get_next_task(&mut self) -> Option<WorkloadTask> {
        if self.current_task >= self.tasks.len() {
            return None;
        }
        self.current_task += 1;

        Some(self.tasks[self.current_task - 1].clone())
    }
}
