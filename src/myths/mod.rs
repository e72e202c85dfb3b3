pub mod catalog;
pub mod engine;
pub mod normalize;
pub mod share;
pub mod types;

pub use catalog::{MythCatalog, GENERAL_RESULT_ID};
pub use engine::{classify, MythEngine};
pub use normalize::normalize_claim;
pub use share::{share_text, MythCheck};
pub use types::{
    ClaimRecord, ClaimScore, EngineConfig, MatchKind, MatchMode, MythError, MythResult, Verdict,
    VerdictTone,
};
