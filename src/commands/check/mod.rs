mod check_exit;
mod check_scan;
mod runner;

pub use check_exit::determine_exit_code;
pub use check_scan::{ScanSummary, scan_root, validate_root};
pub use runner::{ScanOptions, run_check, run_check_impl};
