use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Reference labels attached to every answer, in display order.
pub const SOURCES: [&str; 4] = [
    "Código Civil português",
    "Lei n.º 61/2008 (Regime jurídico do divórcio)",
    "Código do Registo Civil",
    "Jurisprudência dos Tribunais Superiores",
];

pub const CATEGORY: &str = "Direito da Família";
pub const JURISDICTION: &str = "Portugal";
pub const CASELAW: &str =
    "Consulte jurisprudência específica conforme o caso concreto nos tribunais superiores.";
/// Model label reported to callers (not the provider's model id).
pub const MODEL_LABEL: &str = "claude-sonnet-4";

const TITLE_MAX_CHARS: usize = 100;
const TITLE_KEEP_CHARS: usize = 97;

/// The envelope returned for a successful search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub title: String,
    pub content: String,
    pub sources: Vec<String>,
    pub category: String,
    pub jurisdiction: String,
    pub caselaw: String,
    pub model: String,
    pub timestamp: String,
    pub query: String,
}

impl SearchResponse {
    pub fn new(query: &str, content: String) -> Self {
        Self {
            title: make_title(query),
            content,
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
            category: CATEGORY.to_string(),
            jurisdiction: JURISDICTION.to_string(),
            caselaw: CASELAW.to_string(),
            model: MODEL_LABEL.to_string(),
            timestamp: now_iso8601(),
            query: query.to_string(),
        }
    }
}

/// Truncate long queries to 97 chars plus "...".
pub fn make_title(query: &str) -> String {
    if query.chars().count() > TITLE_MAX_CHARS {
        let head: String = query.chars().take(TITLE_KEEP_CHARS).collect();
        format!("{}...", head)
    } else {
        query.to_string()
    }
}

/// Current UTC instant, e.g. `2025-03-01T10:15:30.123Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
