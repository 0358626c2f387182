pub mod check;

pub use check::{ScanOptions, ScanSummary, run_check};
