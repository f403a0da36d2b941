pub mod stats;
pub mod studies;
