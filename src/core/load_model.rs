//! Resource load models.

use std::path::{Path, PathBuf};

use dyn_clone::{clone_trait_object, DynClone};

/// A resource load model is a function, which defines load of resource X at the moment.
/// time - current simulation time, time_from_start - time from task start,
/// which allows to model load peak at the beginning of task lifecycle.
pub trait LoadModel: DynClone {
    fn get_resource_load(&self, time: f64, time_from_start: f64) -> f64;
}

clone_trait_object!(LoadModel);

/// The simplest load model, the constant load.
#[derive(Clone)]
pub struct ConstantLoadModel {
    load: f64,
}

impl ConstantLoadModel {
    pub fn new(load: f64) -> Self {
        Self { load }
    }
}

impl LoadModel for ConstantLoadModel {
    fn get_resource_load(&self, _time: f64, _time_from_start: f64) -> f64 {
        self.load
    }
}

/// Load model reporting zero demand at all times.
///
/// PlanetLab tasks model their demand through the utilization trace, so the
/// descriptor's direct CPU and RAM demand models are bound to this one.
#[derive(Clone, Default)]
pub struct ZeroLoadModel;

impl ZeroLoadModel {
    pub fn new() -> Self {
        Self {}
    }
}

impl LoadModel for ZeroLoadModel {
    fn get_resource_load(&self, _time: f64, _time_from_start: f64) -> f64 {
        0.
    }
}

/// Reference to the utilization time series stored in a single trace file.
///
/// The samples are read lazily by the simulation engine, which interprets
/// consecutive lines as utilization values spaced `scheduling_interval`
/// seconds apart. This crate never parses the samples itself.
#[derive(Clone, Debug, PartialEq)]
pub struct UtilizationTrace {
    /// Path of the trace file.
    pub path: PathBuf,
    /// Interval in seconds between consecutive utilization samples.
    pub scheduling_interval: f64,
}

impl UtilizationTrace {
    /// Creates utilization trace reference.
    pub fn new(path: &Path, scheduling_interval: f64) -> Self {
        Self {
            path: path.to_path_buf(),
            scheduling_interval,
        }
    }
}
