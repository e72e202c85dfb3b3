//! Offline claim classifier.
//!
//! Scores every catalog record against the normalized claim: each trigger
//! pattern found in the claim adds its length in characters, so long,
//! specific phrases outrank short incidental hits. The best record wins only
//! if its score is strictly above the configured threshold; otherwise the
//! general guidance record is returned. Ties go to the earlier record.
//!
//! No I/O and no shared mutable state: `classify` is a pure function of the
//! claim, the catalog and the config.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::catalog::MythCatalog;
use super::normalize::normalize_claim;
use super::types::{ClaimScore, EngineConfig, MatchKind, MatchMode, MythError, MythResult};

/// Classifier bound to one catalog and one config.
#[derive(Debug, Clone)]
pub struct MythEngine {
    catalog: Arc<MythCatalog>,
    config: EngineConfig,
    /// One matcher list per catalog record, in catalog order.
    matchers: Vec<Vec<PatternMatcher>>,
}

static BUILTIN_ENGINE: LazyLock<MythEngine> = LazyLock::new(|| {
    MythEngine::new(MythCatalog::builtin(), EngineConfig::default())
        .expect("Built-in myth patterns must compile")
});

/// Check a claim against the bundled catalog with default settings.
pub fn classify(input: &str) -> MythResult {
    BUILTIN_ENGINE.classify(input)
}

impl MythEngine {
    pub fn new(catalog: Arc<MythCatalog>, config: EngineConfig) -> Result<Self, MythError> {
        let matchers = catalog
            .records()
            .iter()
            .map(|record| {
                record
                    .patterns
                    .iter()
                    .map(|p| PatternMatcher::compile(p, config.match_mode))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            catalog,
            config,
            matchers,
        })
    }

    /// Engine over the bundled catalog with default settings.
    pub fn builtin() -> &'static MythEngine {
        &BUILTIN_ENGINE
    }

    pub fn catalog(&self) -> &MythCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Map a claim to exactly one catalog record or the fallback.
    pub fn classify(&self, input: &str) -> MythResult {
        let normalized = normalize_claim(input);
        if normalized.is_empty() {
            tracing::debug!("Empty claim after normalization, returning general guidance");
            return self.fallback_result(0);
        }

        let mut best: Option<usize> = None;
        let mut max_score = 0;
        for (idx, matchers) in self.matchers.iter().enumerate() {
            let score = score_record(matchers, &normalized);
            if score > max_score {
                max_score = score;
                best = Some(idx);
            }
        }

        match best {
            Some(idx) if max_score > self.config.threshold => {
                let record = &self.catalog.records()[idx];
                tracing::debug!(
                    record_id = %record.id,
                    score = max_score,
                    threshold = self.config.threshold,
                    "Claim matched catalog record"
                );
                MythResult::from_record(
                    record,
                    MatchKind::Catalog {
                        id: record.id.clone(),
                    },
                    max_score,
                )
            }
            _ => {
                tracing::debug!(
                    score = max_score,
                    threshold = self.config.threshold,
                    "No confident match, returning general guidance"
                );
                self.fallback_result(max_score)
            }
        }
    }

    /// Per-record scores in catalog order.
    pub fn score_all(&self, input: &str) -> Vec<ClaimScore> {
        let normalized = normalize_claim(input);
        self.catalog
            .records()
            .iter()
            .zip(&self.matchers)
            .map(|(record, matchers)| ClaimScore {
                id: record.id.clone(),
                score: if normalized.is_empty() {
                    0
                } else {
                    score_record(matchers, &normalized)
                },
            })
            .collect()
    }

    fn fallback_result(&self, score: usize) -> MythResult {
        MythResult::from_record(self.catalog.fallback(), MatchKind::Fallback, score)
    }
}

/// Each pattern counts once, however often it occurs.
fn score_record(matchers: &[PatternMatcher], normalized: &str) -> usize {
    matchers
        .iter()
        .filter(|m| m.matches(normalized))
        .map(PatternMatcher::weight)
        .sum()
}

// ── Pattern matching ────────────────────────────────────────

#[derive(Debug, Clone)]
enum PatternMatcher {
    Substring {
        pattern: String,
        weight: usize,
    },
    WordBoundary {
        regex: Regex,
        weight: usize,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str, mode: MatchMode) -> Result<Self, MythError> {
        let weight = pattern.chars().count();
        match mode {
            MatchMode::Substring => Ok(Self::Substring {
                pattern: pattern.to_string(),
                weight,
            }),
            MatchMode::WordBoundary => {
                // Non-word guards instead of \b: a pattern may start or end with a symbol.
                let source = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(pattern));
                let regex = Regex::new(&source)
                    .map_err(|e| MythError::PatternCompile(pattern.to_string(), e.to_string()))?;
                Ok(Self::WordBoundary { regex, weight })
            }
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Substring { pattern, .. } => normalized.contains(pattern.as_str()),
            Self::WordBoundary { regex, .. } => regex.is_match(normalized),
        }
    }

    fn weight(&self) -> usize {
        match self {
            Self::Substring { weight, .. } | Self::WordBoundary { weight, .. } => *weight,
        }
    }
}
