pub mod dataset_reader;
pub mod planetlab_reader;
