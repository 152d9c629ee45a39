pub mod matchers;
pub mod normalize;

use crate::model::{AbstractRecord, AbstractSet, DuplicatePolicy};
use matchers::{
    bare_id_candidates, block_candidates, labeled_id_candidates, split_blocks, Candidate,
};
use normalize::{normalize_whitespace, truncate_chars};
use std::fmt;

/// Length gate, summary length and duplicate handling for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassPolicy {
    /// A normalized body must be strictly longer than this (in characters).
    pub min_body_chars: usize,
    pub summary_chars: usize,
    pub duplicates: DuplicatePolicy,
}

impl PassPolicy {
    pub const PRIMARY: PassPolicy = PassPolicy {
        min_body_chars: 50,
        summary_chars: 1000,
        duplicates: DuplicatePolicy::KeepLast,
    };

    pub const FALLBACK: PassPolicy = PassPolicy {
        min_body_chars: 100,
        summary_chars: 500,
        duplicates: DuplicatePolicy::KeepFirst,
    };

    /// Normalize a candidate and turn it into a record if it clears the gate.
    pub fn admit(&self, candidate: &Candidate<'_>) -> Option<AbstractRecord> {
        let body = normalize_whitespace(candidate.raw_body);
        let chars = body.chars().count();
        if chars <= self.min_body_chars {
            tracing::debug!(id = candidate.id, chars, "candidate below length gate");
            return None;
        }
        Some(AbstractRecord {
            id: candidate.id.to_string(),
            summary: truncate_chars(&body, self.summary_chars).to_string(),
            body,
        })
    }
}

/// One heuristic of the cascade, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    LabeledId,
    BareId,
    BlockFallback,
}

impl Strategy {
    /// Structured patterns, tried strictly in this order.
    pub const PRIMARY: [Strategy; 2] = [Strategy::LabeledId, Strategy::BareId];

    pub fn policy(self) -> PassPolicy {
        match self {
            Strategy::LabeledId | Strategy::BareId => PassPolicy::PRIMARY,
            Strategy::BlockFallback => PassPolicy::FALLBACK,
        }
    }

    pub fn candidates(self, text: &str) -> Box<dyn Iterator<Item = Candidate<'_>> + '_> {
        match self {
            Strategy::LabeledId => Box::new(labeled_id_candidates(text)),
            Strategy::BareId => Box::new(bare_id_candidates(text)),
            Strategy::BlockFallback => Box::new(block_candidates(text)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LabeledId => write!(f, "labeled-ID pattern"),
            Strategy::BareId => write!(f, "bare-ID pattern"),
            Strategy::BlockFallback => write!(f, "block fallback"),
        }
    }
}

/// Result of a cascade run. `strategy` is `None` when no pass produced a record.
#[derive(Debug, Clone)]
pub struct CascadeOutcome {
    pub strategy: Option<Strategy>,
    pub records: AbstractSet,
}

/// Build a fresh record set from candidates under a single pass policy.
pub fn build_records<'a>(
    candidates: impl IntoIterator<Item = Candidate<'a>>,
    policy: PassPolicy,
) -> AbstractSet {
    let mut records = AbstractSet::new();
    for candidate in candidates {
        if let Some(record) = policy.admit(&candidate) {
            records.insert_with(record, policy.duplicates);
        }
    }
    records
}

/// Run the extraction cascade over the concatenated document text.
///
/// The primary patterns are tried in order and the first one that yields at
/// least one record wins outright. A pass that only produces rejected
/// matches counts as empty. The block fallback runs only when both
/// primary patterns come back empty.
pub fn run_cascade(text: &str) -> CascadeOutcome {
    for (idx, strategy) in Strategy::PRIMARY.into_iter().enumerate() {
        let candidates: Vec<Candidate<'_>> = strategy.candidates(text).collect();
        if candidates.is_empty() {
            continue;
        }
        tracing::info!(
            "Pattern {} found {} potential matches",
            idx + 1,
            candidates.len()
        );

        let records = build_records(candidates, strategy.policy());
        if !records.is_empty() {
            tracing::info!("Successfully extracted {} abstracts", records.len());
            return CascadeOutcome {
                strategy: Some(strategy),
                records,
            };
        }
    }

    tracing::info!("No abstracts found with automatic patterns. Trying block fallback...");
    tracing::info!("Found {} text blocks", split_blocks(text).count());

    let strategy = Strategy::BlockFallback;
    let records = build_records(strategy.candidates(text), strategy.policy());
    CascadeOutcome {
        strategy: (!records.is_empty()).then_some(strategy),
        records,
    }
}
