use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DEFAULT_MATCH_THRESHOLD;

/// Verdict on a health claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Mixed,
    Depends,
}

/// Display tone of a verdict card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTone {
    /// The claim holds.
    Positive,
    /// The claim is a myth.
    Warning,
    /// Partly true, partly myth.
    Caution,
    /// No single answer.
    Neutral,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Mixed => "Mixed",
            Self::Depends => "Depends",
        }
    }

    pub fn tone(&self) -> VerdictTone {
        match self {
            Self::True => VerdictTone::Positive,
            Self::False => VerdictTone::Warning,
            Self::Mixed => VerdictTone::Caution,
            Self::Depends => VerdictTone::Neutral,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One known claim in the catalog.
///
/// Field names on the wire follow the JSON the mobile and web clients
/// already consume (`safeAdvice`, `whenToCallDoctor`, `sourcesLabel`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: String,
    /// Canonical wording of the claim, shown as the card title.
    pub claim: String,
    /// Lower-case trigger phrases (English and Bengali).
    #[serde(default)]
    pub patterns: Vec<String>,
    pub verdict: Verdict,
    pub explanation: String,
    pub safe_advice: Vec<String>,
    #[serde(rename = "whenToCallDoctor")]
    pub escalation_signs: Vec<String>,
    #[serde(rename = "sourcesLabel")]
    pub source_label: String,
}

/// Whether a result came from a catalog record or the general fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    Catalog { id: String },
    Fallback,
}

/// Outcome of checking one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MythResult {
    pub id: String,
    pub claim: String,
    pub verdict: Verdict,
    pub tone: VerdictTone,
    pub explanation: String,
    pub safe_advice: Vec<String>,
    #[serde(rename = "whenToCallDoctor")]
    pub escalation_signs: Vec<String>,
    #[serde(rename = "sourcesLabel")]
    pub source_label: String,
    pub match_kind: MatchKind,
    /// Highest record score seen. For a fallback this is the score that
    /// failed to clear the threshold.
    pub score: usize,
}

impl MythResult {
    pub(crate) fn from_record(record: &ClaimRecord, match_kind: MatchKind, score: usize) -> Self {
        Self {
            id: record.id.clone(),
            claim: record.claim.clone(),
            verdict: record.verdict,
            tone: record.verdict.tone(),
            explanation: record.explanation.clone(),
            safe_advice: record.safe_advice.clone(),
            escalation_signs: record.escalation_signs.clone(),
            source_label: record.source_label.clone(),
            match_kind,
            score,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.match_kind == MatchKind::Fallback
    }
}

/// Score of a single catalog record against a normalized claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimScore {
    pub id: String,
    pub score: usize,
}

/// How a trigger pattern is tested against the normalized claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment. "tea" matches inside "steak".
    #[default]
    Substring,
    /// The pattern must not be embedded in a larger word.
    WordBoundary,
}

/// Tuning for the claim classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// A record must score strictly above this to be returned.
    pub threshold: usize,
    pub match_mode: MatchMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            match_mode: MatchMode::default(),
        }
    }
}

/// Myth catalog errors. Classification itself never fails.
#[derive(Error, Debug)]
pub enum MythError {
    #[error("Failed to read catalog {0}: {1}")]
    CatalogRead(String, String),

    #[error("Failed to parse catalog {0}: {1}")]
    CatalogParse(String, String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompile(String, String),
}
