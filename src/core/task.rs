//! Workload task descriptor.

use crate::core::load_model::{LoadModel, UtilizationTrace};

/// Represents a single task produced from one PlanetLab trace file.
///
/// Described by the amount of computations in instructions, the number of used
/// processing elements, the input/output sizes and the resource demand models.
/// The list returned by the loader is sorted by descending [`qos`](Self::qos),
/// which is the only order consumers may rely on.
#[derive(Clone)]
pub struct WorkloadTask {
    /// Sequential task id assigned in directory enumeration order (0-based).
    pub id: u32,
    /// The amount of computations performed by this task in instructions.
    pub length: u64,
    /// QoS score read from the last non-empty line of the trace.
    /// Tasks with higher scores are scheduled first.
    pub qos: i64,
    /// Number of processing elements used by this task.
    pub cores: u32,
    /// Input file size in bytes.
    pub file_size: u64,
    /// Output size in bytes.
    pub output_size: u64,
    /// Utilization time series of this task, consumed lazily by the engine.
    pub utilization: UtilizationTrace,
    /// Direct CPU demand model, zero for trace-driven tasks.
    pub cpu_load_model: Box<dyn LoadModel>,
    /// Direct RAM demand model, zero for trace-driven tasks.
    pub ram_load_model: Box<dyn LoadModel>,
    /// Identifier of the broker owning every task from one load.
    pub owner_id: u32,
    /// Resource slot (VM) the task is initially mapped to.
    /// Initialized to the same value as `id`, but schedulers are free to
    /// reassign it, so the two must not be assumed equal afterwards.
    pub vm_id: u32,
}
