pub mod dataset;
pub mod entry;
pub mod navigator;
