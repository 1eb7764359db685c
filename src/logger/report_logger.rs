use crate::config::constants::SNIPPET_PREVIEW_LIMIT;
use crate::enums::score_tier::ScoreTier;
use crate::structs::analysis_history::AnalysisHistory;
use crate::structs::analysis_result::CodeAnalysisResult;
use crate::structs::best_practice::BestPractice;
use crate::structs::category_stats::CategoryStats;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::performance_issue::PerformanceIssue;
use crate::structs::security_issue::SecurityIssue;
use crate::structs::suggestion::Suggestion;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const RESET: &str = "\x1b[0m";

/// Renders a result as categorized panels and a history list as entries.
/// All functions build strings; the callers decide where they go. Rendering
/// derives styling only, never data: the one computation is threshold-based
/// classification of score, severity and impact.
pub struct ReportLogger;

impl ReportLogger {
    pub fn print_report(result: &CodeAnalysisResult, analysis: &AnalysisConfig) {
        println!("{}", Self::render_report(result, analysis));
    }

    pub fn render_report(result: &CodeAnalysisResult, analysis: &AnalysisConfig) -> String {
        let mut out = String::new();

        out.push_str("🔍 CODE ANALYSIS REPORT\n");
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&Self::render_score_badge(result.overall_score));
        out.push('\n');

        if result.overall_score < analysis.score_threshold {
            out.push_str(&format!(
                "⚠️ Score is below the configured threshold of {}\n",
                analysis.score_threshold
            ));
        }

        // Toggled-off categories are skipped entirely; enabled-but-empty
        // categories always render their placeholder panel.
        if analysis.security_scan {
            out.push('\n');
            out.push_str(&Self::render_security_panel(&result.security_issues));
        }
        if analysis.performance_scan {
            out.push('\n');
            out.push_str(&Self::render_performance_panel(&result.performance_issues));
        }
        if analysis.best_practices_scan {
            out.push('\n');
            out.push_str(&Self::render_best_practices_panel(&result.best_practices));
        }
        if analysis.style_scan {
            out.push('\n');
            out.push_str(&Self::render_suggestions_panel(&result.suggestions));
        }

        out
    }

    pub fn render_score_badge(score: u8) -> String {
        let tier = ScoreTier::from_score(score);
        format!(
            "{} Overall Score: {}{}/100{} ({})",
            tier.emoji(),
            tier.color(),
            score,
            RESET,
            tier.label()
        )
    }

    pub fn render_security_panel(issues: &[SecurityIssue]) -> String {
        let mut out = format!("🔒 SECURITY ISSUES ({})\n", issues.len());

        if issues.is_empty() {
            out.push_str("  No security issues found\n");
            return out;
        }

        // Most severe first.
        let mut sorted: Vec<&SecurityIssue> = issues.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));

        for issue in sorted {
            out.push_str(&format!(
                "  {} [{}] {} at line {}, column {}\n",
                issue.severity.emoji(),
                issue.severity.label(),
                issue.issue_type,
                issue.line,
                issue.column
            ));
            out.push_str(&format!("     {}\n", issue.message));
            out.push_str(&Self::render_snippet("Code", &issue.code_snippet));
            out.push_str(&Self::render_snippet("Suggested fix", &issue.suggested_fix));

            let mut tags: Vec<&str> = Vec::new();
            if let Some(cwe) = &issue.cwe {
                tags.push(cwe);
            }
            if let Some(owasp) = &issue.owasp {
                tags.push(owasp);
            }
            if !tags.is_empty() {
                out.push_str(&format!("     🏷  {}\n", tags.join(" · ")));
            }
        }

        out
    }

    pub fn render_performance_panel(issues: &[PerformanceIssue]) -> String {
        let mut out = format!("⚡ PERFORMANCE ISSUES ({})\n", issues.len());

        if issues.is_empty() {
            out.push_str("  No performance issues found\n");
            return out;
        }

        // Highest impact first.
        let mut sorted: Vec<&PerformanceIssue> = issues.iter().collect();
        sorted.sort_by(|a, b| b.impact.cmp(&a.impact));

        for issue in sorted {
            out.push_str(&format!(
                "  🚀 [{}] Line {}, column {}\n",
                issue.impact.label(),
                issue.line,
                issue.column
            ));
            out.push_str(&format!("     {}\n", issue.message));
            out.push_str(&Self::render_snippet("Code", &issue.code_snippet));
            out.push_str(&Self::render_snippet("Suggested fix", &issue.suggested_fix));

            if let Some(improvement) = &issue.estimated_improvement {
                out.push_str(&format!("     📈 Estimated improvement: {}\n", improvement));
            }
        }

        out
    }

    pub fn render_best_practices_panel(practices: &[BestPractice]) -> String {
        let mut out = format!("📚 BEST PRACTICES ({})\n", practices.len());

        if practices.is_empty() {
            out.push_str("  No best practice suggestions\n");
            return out;
        }

        for practice in practices {
            out.push_str(&format!("  📖 Line {}, column {}\n", practice.line, practice.column));
            out.push_str(&format!("     {}\n", practice.message));
            out.push_str(&Self::render_snippet("Code", &practice.code_snippet));
            out.push_str(&Self::render_snippet("Suggested fix", &practice.suggested_fix));

            if let Some(reference) = &practice.reference {
                out.push_str(&format!("     🔗 Learn more: {}\n", reference));
            }
        }

        out
    }

    pub fn render_suggestions_panel(suggestions: &[Suggestion]) -> String {
        let mut out = format!("💬 SUGGESTIONS ({})\n", suggestions.len());

        if suggestions.is_empty() {
            out.push_str("  No suggestions found\n");
            return out;
        }

        for suggestion in suggestions {
            out.push_str(&format!(
                "  {} [{}] Line {}, column {}\n",
                suggestion.severity.emoji(),
                suggestion.severity.label(),
                suggestion.line,
                suggestion.column
            ));
            out.push_str(&format!("     {}\n", suggestion.message));
            out.push_str(&Self::render_snippet("Code", &suggestion.code_snippet));
            out.push_str(&Self::render_snippet("Suggested fix", &suggestion.suggested_fix));
        }

        out
    }

    pub fn print_history(entries: &[&AnalysisHistory], limit: usize) {
        println!("{}", Self::render_history(entries, limit));
    }

    pub fn render_history(entries: &[&AnalysisHistory], limit: usize) -> String {
        let mut out = String::new();

        out.push_str("📜 ANALYSIS HISTORY\n");
        out.push_str(RULE);
        out.push('\n');

        if entries.is_empty() {
            out.push_str("  No analysis sessions recorded yet\n");
            return out;
        }

        for entry in entries.iter().take(limit) {
            let tier = ScoreTier::from_score(entry.result.overall_score);
            out.push_str(&format!(
                "\n  {} Code Analysis — Score: {}{}/100{}\n",
                Self::capitalize(&entry.language),
                tier.color(),
                entry.result.overall_score,
                RESET
            ));
            out.push_str(&format!(
                "  🕒 {}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));

            for line in Self::truncate_snippet(&entry.code_snippet).lines() {
                out.push_str(&format!("     | {}\n", line));
            }

            let badges: Vec<String> = CategoryStats::non_empty(&entry.result)
                .iter()
                .map(|s| format!("[{} {}]", s.count, s.category))
                .collect();
            if !badges.is_empty() {
                out.push_str(&format!("     {}\n", badges.join(" ")));
            }
        }

        out
    }

    /// First 100 characters plus an ellipsis when longer; a snippet of
    /// exactly 100 characters is left untouched.
    pub fn truncate_snippet(snippet: &str) -> String {
        if snippet.chars().count() <= SNIPPET_PREVIEW_LIMIT {
            return snippet.to_string();
        }

        let truncated: String = snippet.chars().take(SNIPPET_PREVIEW_LIMIT).collect();
        format!("{}...", truncated)
    }

    fn render_snippet(title: &str, snippet: &str) -> String {
        let mut out = format!("     {}:\n", title);
        for line in snippet.lines() {
            out.push_str(&format!("       | {}\n", line));
        }
        out
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}
