use crate::structs::analysis_result::CodeAnalysisResult;

/// Per-category finding counts for one result, used for the badge row in
/// history entries and the report summary line.
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub category: &'static str,
    pub count: usize,
}

impl CategoryStats {
    /// Counts in display order. Empty categories are skipped, matching the
    /// badge row which only shows non-empty categories.
    pub fn non_empty(result: &CodeAnalysisResult) -> Vec<CategoryStats> {
        let all = [
            ("Security Issues", result.security_issues.len()),
            ("Performance Issues", result.performance_issues.len()),
            ("Best Practices", result.best_practices.len()),
            ("Suggestions", result.suggestions.len()),
        ];

        all.into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| CategoryStats { category, count })
            .collect()
    }
}
