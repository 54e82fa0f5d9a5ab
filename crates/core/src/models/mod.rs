pub mod chart;
pub mod entry;
pub mod summary;
