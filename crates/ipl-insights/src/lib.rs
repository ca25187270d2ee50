pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod stats;
pub mod telemetry;

#[cfg(test)]
mod test_support;
