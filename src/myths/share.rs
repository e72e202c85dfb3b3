use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::engine::MythEngine;
use super::types::MythResult;

/// A statement the user asked about, with the verdict it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MythCheck {
    pub statement: String,
    pub result: MythResult,
    pub checked_at: NaiveDateTime,
}

impl MythCheck {
    pub fn run(engine: &MythEngine, statement: &str) -> Self {
        Self {
            statement: statement.to_string(),
            result: engine.classify(statement),
            checked_at: chrono::Local::now().naive_local(),
        }
    }

    pub fn share_text(&self) -> String {
        share_text(&self.statement, &self.result)
    }
}

/// Plain-text summary for the clipboard or a chat message.
pub fn share_text(statement: &str, result: &MythResult) -> String {
    format!(
        "Myth Check: {}\nVerdict: {}\nExplanation: {}\nSource: {}",
        statement.trim(),
        result.verdict,
        result.explanation,
        result.source_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::myths::engine::classify;

    #[test]
    fn share_text_has_four_lines() {
        let result = classify("Can spicy food cause a miscarriage?");
        let text = share_text("Can spicy food cause a miscarriage?", &result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Myth Check: Can spicy food cause a miscarriage?");
        assert_eq!(lines[1], "Verdict: False");
        assert!(lines[2].starts_with("Explanation: Spicy food is perfectly safe"));
        assert_eq!(lines[3], "Source: NHS UK");
    }

    #[test]
    fn share_text_for_fallback() {
        let result = classify("something unheard of");
        let text = share_text("  something unheard of  ", &result);
        assert!(text.starts_with("Myth Check: something unheard of\n"));
        assert!(text.contains("Verdict: Depends"));
        assert!(text.ends_with("Source: Nurture Glow General Guidance"));
    }

    #[test]
    fn myth_check_records_statement_and_result() {
        let check = MythCheck::run(MythEngine::builtin(), "Is papaya safe?");
        assert_eq!(check.statement, "Is papaya safe?");
        assert_eq!(check.result.id, "m9");
        assert!(check.share_text().contains("Verdict: Depends"));
    }

    #[test]
    fn myth_check_serializes_camel_case() {
        let check = MythCheck::run(MythEngine::builtin(), "coffee");
        let json = serde_json::to_value(&check).unwrap();
        assert!(json.get("checkedAt").is_some());
        assert_eq!(json["result"]["sourcesLabel"], "ACOG Guidelines");
        assert_eq!(json["result"]["matchKind"]["kind"], "catalog");
        assert!(json["result"]["whenToCallDoctor"].is_array());
    }
}
