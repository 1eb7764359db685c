use serde::{Deserialize, Serialize};
use crate::enums::security_severity::SecuritySeverity;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SecurityIssue {
    pub id: String,
    /// Free-text vulnerability class, e.g. "XSS" or "SQL Injection".
    #[serde(rename = "type")]
    pub issue_type: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: SecuritySeverity,
    pub code_snippet: String,
    pub suggested_fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owasp: Option<String>,
}
