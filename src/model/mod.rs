pub mod records;
pub mod thresholds;
