use crate::structs::analysis_history::AnalysisHistory;

/// In-memory history for the current process. There is no persistence layer;
/// entries live exactly as long as the session that produced them.
#[derive(Default)]
pub struct HistoryStore {
    entries: Vec<AnalysisHistory>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: AnalysisHistory) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first. Ordering is computed here, at presentation time;
    /// the stored list stays in insertion order.
    pub fn newest_first(&self) -> Vec<&AnalysisHistory> {
        let mut sorted: Vec<&AnalysisHistory> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::structs::analysis_result::CodeAnalysisResult;

    fn entry(code: &str, minutes_ago: i64) -> AnalysisHistory {
        let mut e = AnalysisHistory::record(
            "1",
            code.to_string(),
            "javascript".to_string(),
            CodeAnalysisResult {
                suggestions: vec![],
                security_issues: vec![],
                performance_issues: vec![],
                best_practices: vec![],
                overall_score: 78,
            },
        );
        e.timestamp = Utc::now() - Duration::minutes(minutes_ago);
        e
    }

    #[test]
    fn newest_first_sorts_by_timestamp_descending() {
        let mut store = HistoryStore::new();
        store.record(entry("older", 30));
        store.record(entry("newest", 1));
        store.record(entry("oldest", 60));

        let ordered: Vec<&str> = store
            .newest_first()
            .iter()
            .map(|e| e.code_snippet.as_str())
            .collect();
        assert_eq!(ordered, vec!["newest", "older", "oldest"]);
    }

    #[test]
    fn stored_order_is_untouched_by_sorting() {
        let mut store = HistoryStore::new();
        store.record(entry("first", 10));
        store.record(entry("second", 20));

        let _ = store.newest_first();
        assert_eq!(store.entries[0].code_snippet, "first");
        assert_eq!(store.entries[1].code_snippet, "second");
    }
}
