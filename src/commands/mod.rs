//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_root};
pub use check::{CheckConfig, CheckResult, CheckStep, check_words};
pub use simple::run_simple;
