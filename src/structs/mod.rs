pub mod analysis_history;
pub mod analysis_result;
pub mod analyze_request;
pub mod best_practice;
pub mod category_stats;
pub mod cli;
pub mod config;
pub mod performance_issue;
pub mod security_issue;
pub mod suggestion;
pub mod user;
