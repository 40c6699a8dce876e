pub mod config;
pub mod load_model;
pub mod task;
