pub mod commands;
pub mod impact_level;
pub mod score_tier;
pub mod security_severity;
pub mod session_status;
pub mod suggestion_severity;
